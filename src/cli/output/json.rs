//! JSON output formatting and schema validation

use serde_json::Value;

use super::ReportRenderer;
use crate::error::{BizRulesError, OutputError};
use crate::report::ReportDocument;

/// JSON Schema (draft-07) describing the report document
pub const REPORT_SCHEMA: &str = include_str!("../../../schemas/report.schema.json");

pub struct JsonOutput {
    validate: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { validate: false }
    }

    /// Check the rendered document against [`REPORT_SCHEMA`] before returning it
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, document: &ReportDocument<'_>) -> Result<String, BizRulesError> {
        if self.validate {
            let value = serde_json::to_value(document)?;
            validate_report(&value)?;
        }
        Ok(serde_json::to_string_pretty(document)?)
    }
}

/// Validate a report value against [`REPORT_SCHEMA`]
pub fn validate_report(report: &Value) -> Result<(), OutputError> {
    let schema: Value =
        serde_json::from_str(REPORT_SCHEMA).map_err(|e| OutputError::SchemaValidation {
            message: format!("bundled schema is not valid JSON: {e}"),
        })?;
    let validator =
        jsonschema::validator_for(&schema).map_err(|e| OutputError::SchemaValidation {
            message: format!("bundled schema does not compile: {e}"),
        })?;

    let errors: Vec<String> = validator
        .iter_errors(report)
        .map(|error| format!("{} at '{}'", error, error.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(OutputError::SchemaValidation {
            message: errors.join("; "),
        })
    }
}
