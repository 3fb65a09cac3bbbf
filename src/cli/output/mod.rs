//! Output formatting module for CLI

pub mod json;
mod summary;
mod terminal;

pub use json::JsonOutput;
pub use summary::SummaryOutput;
pub use terminal::TerminalOutput;

use crate::error::BizRulesError;
use crate::report::ReportDocument;

/// Trait for rendering a report artifact
pub trait ReportRenderer {
    fn render_report(&self, document: &ReportDocument<'_>) -> Result<String, BizRulesError>;
}
