//! Rules module - Business rule taxonomy, matching and aggregation

pub mod aggregate;
pub mod category;
pub mod engine;
pub mod matcher;
pub mod modules;
pub mod patterns;
pub mod results;

pub use aggregate::AggregateReport;
pub use category::RuleCategory;
pub use results::{ExtractionResults, RuleDetail, RuleOccurrence};
