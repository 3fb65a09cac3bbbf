//! Init command - Write a default configuration file

use colored::Colorize;
use std::fs;

use super::InitArgs;
use crate::cli::{exit_codes, Context};
use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{BizRulesError, OutputError};

pub fn execute(args: InitArgs, context: &Context) -> Result<i32, BizRulesError> {
    let config_path = context
        .config_path
        .clone()
        .map(|path| Config::resolve(&context.directory, &path))
        .unwrap_or_else(|| context.directory.join(CONFIG_FILENAME));

    if config_path.exists() && !args.force {
        eprintln!(
            "{} {} already exists. Use --force to overwrite.",
            "Error:".red().bold(),
            config_path.display()
        );
        return Ok(exit_codes::ERROR);
    }

    let config_content = Config::default().to_toml()?;
    fs::write(&config_path, &config_content).map_err(|e| OutputError::FileWrite {
        path: config_path.display().to_string(),
        source: e,
    })?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        config_path.display().to_string().cyan()
    );

    println!("\nNext steps:");
    println!(
        "  1. Set {} and the {} rules",
        "controllers_dir".cyan(),
        "[[modules]]".cyan()
    );
    println!("  2. Run {} to write the report", "bizrules extract".cyan());

    Ok(exit_codes::SUCCESS)
}
