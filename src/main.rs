//! bizrules - Inventory business rules in controller source trees
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bizrules::cli::{commands, exit_codes, Cli, Commands};
use bizrules::BizRulesError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    let context = cli.context();

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Extract(args) => commands::extract::execute(args, &context),
        Commands::Init(args) => commands::init::execute(args, &context),
        Commands::Schema(args) => commands::schema::execute(args),
        Commands::GenerateMan(args) => commands::generate_man::execute(args),
    };

    // Handle exit codes for CI integration
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(error_exit_code(&e));
        }
    }
}

fn error_exit_code(error: &BizRulesError) -> i32 {
    if error.is_configuration() {
        exit_codes::INVALID_CONFIG
    } else {
        exit_codes::ERROR
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
