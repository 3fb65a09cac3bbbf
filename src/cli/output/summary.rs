//! Plain-text summary artifact

use super::ReportRenderer;
use crate::error::BizRulesError;
use crate::report::{render_summary, ReportDocument};

pub struct SummaryOutput {
    project_name: Option<String>,
}

impl SummaryOutput {
    pub fn new(project_name: Option<String>) -> Self {
        Self { project_name }
    }
}

impl ReportRenderer for SummaryOutput {
    fn render_report(&self, document: &ReportDocument<'_>) -> Result<String, BizRulesError> {
        Ok(render_summary(document, self.project_name.as_deref()))
    }
}
