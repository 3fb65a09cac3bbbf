//! # CLI Module
//!
//! This module defines the command-line interface for bizrules using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `extract` | Scan controllers and write the business rules report |
//! | `init` | Write a default `.bizrules.toml` |
//! | `schema` | Display the JSON Schema of the report document |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//! - `-C, --directory <DIR>` - Working directory (defaults to current directory)
//!
//! ## Examples
//!
//! ```bash
//! # Write a configuration file, then extract
//! bizrules init
//! bizrules extract
//!
//! # Scan another tree and print the document instead of writing files
//! bizrules extract --controllers-dir src/Controllers --stdout
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{ExtractArgs, GenerateManArgs, InitArgs, SchemaArgs};

/// bizrules - Inventory business rules in controller source trees
#[derive(Parser, Debug)]
#[command(name = "bizrules")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Options shared by every command
    pub fn context(&self) -> Context {
        Context {
            config_path: self.config.clone(),
            directory: self
                .directory
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Resolved global options
#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: Option<PathBuf>,
    pub directory: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan controllers and write the business rules report
    Extract(ExtractArgs),

    /// Write a default configuration file
    Init(InitArgs),

    /// Display the JSON Schema for the report document
    Schema(SchemaArgs),

    /// Generate man page (hidden, for packaging)
    #[command(hide = true)]
    GenerateMan(GenerateManArgs),
}
