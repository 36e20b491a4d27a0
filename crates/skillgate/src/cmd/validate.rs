use std::io::Read;
use std::path::Path;

use skillgate_envelope::{shared, ContractError};

use crate::cmd::ValidateArgs;
use crate::exit::{contract_error, io_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_report, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let (source, payload) = read_document(&args.file)?;

    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|err| CliError::new(DATA_INVALID, format!("payload is not valid JSON: {err}")))?;

    match shared().validate_named(&args.envelope, &value) {
        Ok(()) => {
            print_report(&args.envelope, &source, &[], format);
            Ok(SUCCESS)
        }
        Err(ContractError::Violation { kind, defects }) => {
            print_report(kind.name(), &source, &defects, format);
            Ok(DATA_INVALID)
        }
        Err(other) => Err(contract_error("validation failed", other)),
    }
}

fn read_document(file: &Path) -> CliResult<(String, Vec<u8>)> {
    if file.as_os_str() == "-" {
        let mut payload = Vec::new();
        std::io::stdin()
            .read_to_end(&mut payload)
            .map_err(|err| io_error("reading stdin failed", err))?;
        return Ok(("<stdin>".to_string(), payload));
    }
    let payload =
        std::fs::read(file).map_err(|err| io_error(&format!("reading {} failed", file.display()), err))?;
    Ok((file.display().to_string(), payload))
}
