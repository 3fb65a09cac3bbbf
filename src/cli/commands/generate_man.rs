//! Generate man page command

use clap::CommandFactory;
use std::fs;

use super::GenerateManArgs;
use crate::cli::{exit_codes, Cli};
use crate::error::{BizRulesError, OutputError};

/// Execute the generate-man command
pub fn execute(args: GenerateManArgs) -> Result<i32, BizRulesError> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let output_path = args.output.join("bizrules.1");

    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer).map_err(|e| OutputError::ManPage {
        message: e.to_string(),
    })?;

    fs::write(&output_path, buffer).map_err(|e| OutputError::FileWrite {
        path: output_path.display().to_string(),
        source: e,
    })?;

    println!("Man page generated: {}", output_path.display());

    Ok(exit_codes::SUCCESS)
}
