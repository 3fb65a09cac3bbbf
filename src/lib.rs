//! bizrules Library
//!
//! This crate inventories the business rules embedded in controller source
//! files. Files are classified into business modules, matched against a fixed
//! taxonomy of rule patterns, and the resulting occurrences are aggregated
//! into a JSON document and a plain-text summary.
//!
//! # Example
//!
//! ```no_run
//! use bizrules::config::Config;
//! use bizrules::rules::engine::ExtractionEngine;
//! use bizrules::rules::AggregateReport;
//! use bizrules::scanner::Scanner;
//!
//! # fn main() -> Result<(), bizrules::BizRulesError> {
//! let config = Config::default();
//! let engine = ExtractionEngine::from_config(&config)?;
//! let scanner = Scanner::new(config.controllers_dir.clone(), config.recursive)?;
//! let results = engine.run(&scanner);
//! let report = AggregateReport::from_results(&results);
//! println!("{} rules", report.total);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod utils;

pub use error::BizRulesError;
