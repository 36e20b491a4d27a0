use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use skillgate_schema::Defect;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct DefectOutput<'a> {
    path: &'a str,
    code: &'static str,
    detail: &'a str,
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    schema_id: &'static str,
    envelope: &'a str,
    source: &'a str,
    valid: bool,
    defects: Vec<DefectOutput<'a>>,
}

pub fn print_report(envelope: &str, source: &str, defects: &[Defect], format: OutputFormat) {
    let report = ValidationReport {
        schema_id: "https://schemas.skillgate.dev/cli/v1/validation-report.schema.json",
        envelope,
        source,
        valid: defects.is_empty(),
        defects: defects
            .iter()
            .map(|d| DefectOutput {
                path: &d.path,
                code: d.kind.code(),
                detail: &d.detail,
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&report).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            if report.valid {
                println!("{source}: valid {envelope} envelope");
                return;
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PATH", "DEFECT", "DETAIL"]);
            for defect in &report.defects {
                table.add_row(vec![defect.path, defect.code, defect.detail]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            if report.valid {
                println!("{source}: valid {envelope} envelope");
            } else {
                println!(
                    "{source}: invalid {envelope} envelope ({} defect(s))",
                    report.defects.len()
                );
                for defect in defects {
                    println!("  {defect}");
                }
            }
        }
        OutputFormat::Raw => {
            println!("{}", if report.valid { "valid" } else { "invalid" });
        }
    }
}
