use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod envelopes;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON document against an envelope contract.
    Validate(ValidateArgs),
    /// List the registered envelope families and their fields.
    Envelopes(EnvelopesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Envelopes(args) => envelopes::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON document to validate, or `-` for stdin.
    pub file: PathBuf,
    /// Envelope family to validate against (see `skillgate envelopes`).
    #[arg(long, short = 'e', value_name = "NAME")]
    pub envelope: String,
}

#[derive(Args, Debug, Default)]
pub struct EnvelopesArgs {}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
