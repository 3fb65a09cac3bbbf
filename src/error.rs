//! Error types for bizrules
//!
//! This module defines custom error types using `thiserror`. Errors are split
//! by the stage that produces them so the CLI can map each one to an exit code:
//! scan errors are usually recovered per file, while configuration, catalog and
//! output errors abort the run.

use thiserror::Error;

/// Main error type for bizrules
#[derive(Error, Debug)]
pub enum BizRulesError {
    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pattern catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Report output errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BizRulesError {
    /// Whether the error comes from invalid configuration or taxonomy
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Catalog(_))
    }
}

/// Errors that occur while discovering or reading controller files
#[derive(Error, Debug)]
pub enum ScanError {
    /// The configured controllers directory does not exist
    #[error("Controllers directory not found: '{path}'")]
    RootNotFound {
        /// Path that was configured
        path: String,
    },

    /// Failed to read a file
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Errors related to configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse the configuration file
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize the configuration
    #[error("Failed to serialize config: {message}")]
    Serialize {
        /// Error message
        message: String,
    },

    /// A module glob could not be compiled
    #[error("Invalid module pattern '{pattern}': {message}")]
    InvalidGlob {
        /// The offending glob
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// A value is out of its accepted range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Configuration key
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

/// Errors raised while compiling the pattern catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A catalog expression is not a valid regular expression
    #[error("Invalid expression for '{label}' in category '{category}': {source}")]
    InvalidPattern {
        /// Category the entry belongs to
        category: &'static str,
        /// Human-readable label of the entry
        label: &'static str,
        /// The regex compiler error
        source: regex::Error,
    },
}

/// Errors that occur while producing report artifacts
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to create the output directory
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// Directory path
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write an artifact
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the artifact
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The report document does not satisfy the bundled JSON Schema
    #[error("Report failed schema validation: {message}")]
    SchemaValidation {
        /// Validation errors, joined
        message: String,
    },

    /// Failed to render the man page
    #[error("Failed to render man page: {message}")]
    ManPage {
        /// Error message
        message: String,
    },
}

impl From<toml::de::Error> for BizRulesError {
    fn from(err: toml::de::Error) -> Self {
        BizRulesError::Config(ConfigError::Parse(err))
    }
}
