//! Schema command - Display the JSON Schema for the report document

use colored::Colorize;

use super::SchemaArgs;
use crate::cli::exit_codes;
use crate::cli::output::json::REPORT_SCHEMA;
use crate::error::{BizRulesError, OutputError};

pub fn execute(args: SchemaArgs) -> Result<i32, BizRulesError> {
    match args.output {
        Some(output_path) => {
            std::fs::write(&output_path, REPORT_SCHEMA).map_err(|e| {
                BizRulesError::Output(OutputError::FileWrite {
                    path: output_path.display().to_string(),
                    source: e,
                })
            })?;

            println!(
                "{} Schema written to: {}",
                "Success:".green().bold(),
                output_path.display().to_string().cyan()
            );
        }
        None => {
            println!("{REPORT_SCHEMA}");
        }
    }

    Ok(exit_codes::SUCCESS)
}
