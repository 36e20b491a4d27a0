use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use skillgate_envelope::shared;

use crate::cmd::EnvelopesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct FieldInfo {
    name: &'static str,
    required: bool,
    kind: String,
}

#[derive(Serialize)]
struct EnvelopeInfo {
    name: &'static str,
    fields: Vec<FieldInfo>,
}

#[derive(Serialize)]
struct EnvelopesOutput {
    schema_id: &'static str,
    envelopes: Vec<EnvelopeInfo>,
}

pub fn run(_args: EnvelopesArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = shared();
    let envelopes: Vec<EnvelopeInfo> = registry
        .kinds()
        .into_iter()
        .map(|kind| EnvelopeInfo {
            name: kind.name(),
            fields: registry
                .schema(kind)
                .root()
                .fields()
                .iter()
                .map(|field| FieldInfo {
                    name: field.name,
                    required: field.required,
                    kind: field.kind.describe(),
                })
                .collect(),
        })
        .collect();

    let output = EnvelopesOutput {
        schema_id: "https://schemas.skillgate.dev/cli/v1/envelope-list.schema.json",
        envelopes,
    };
    print_envelopes(&output, format);
    Ok(SUCCESS)
}

fn print_envelopes(output: &EnvelopesOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(output).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ENVELOPE", "FIELD", "REQUIRED", "KIND"]);
            for envelope in &output.envelopes {
                for field in &envelope.fields {
                    table.add_row(vec![
                        envelope.name,
                        field.name,
                        if field.required { "yes" } else { "no" },
                        &field.kind,
                    ]);
                }
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for envelope in &output.envelopes {
                println!("{}", envelope.name);
                for field in &envelope.fields {
                    println!(
                        "  {:<14} {:<8} {}",
                        field.name,
                        if field.required { "required" } else { "optional" },
                        field.kind
                    );
                }
            }
        }
        OutputFormat::Raw => {
            for envelope in &output.envelopes {
                println!("{}", envelope.name);
            }
        }
    }
}
