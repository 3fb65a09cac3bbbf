//! CLI commands module

pub mod extract;
pub mod generate_man;
pub mod init;
pub mod schema;

use clap::Args;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Controllers directory (overrides configuration)
    #[arg(long, value_name = "DIR")]
    pub controllers_dir: Option<PathBuf>,

    /// Output directory for the report artifacts (overrides configuration)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of rules listed per category (overrides configuration)
    #[arg(long, value_name = "N")]
    pub sample_limit: Option<usize>,

    /// Validate the JSON document against the JSON Schema before writing
    #[arg(long)]
    pub validate: bool,

    /// Print the JSON document to stdout instead of writing artifacts
    #[arg(long)]
    pub stdout: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the generate-man command
#[derive(Args, Debug)]
pub struct GenerateManArgs {
    /// Directory receiving bizrules.1
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,
}
