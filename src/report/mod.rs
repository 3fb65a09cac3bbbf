//! # Report Builder
//!
//! Reshapes an [`AggregateReport`] into the two report artifacts:
//!
//! - [`ReportDocument`] - the structured JSON document
//! - [`summary::render_summary`] - the plain-text summary
//!
//! The builder adds no interpretation. The only lossy step is the per-category
//! rule sample, which lists the first `sample_limit` occurrences while `count`
//! and every total keep the full cardinality.
//!
//! ## Document shape
//!
//! ```text
//! {extractionDate, totalRules,
//!  summary:    {<category>: count, ...},
//!  categories: {<category>: {count, description, rules: [...]}},
//!  byModule:   {<module>: {<category>: count, ..., total}}}
//! ```

pub mod summary;
pub mod writer;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::rules::aggregate::{AggregateReport, ModuleTotals};
use crate::rules::{RuleCategory, RuleOccurrence};

pub use summary::render_summary;
pub use writer::{write_artifacts, ArtifactPaths};

/// Default number of occurrences listed per category
pub const DEFAULT_SAMPLE_LIMIT: usize = 50;

/// One entry of the `categories` section
#[derive(Debug, Clone, Serialize)]
pub struct CategorySection<'a> {
    pub count: usize,
    pub description: &'static str,
    pub rules: Vec<&'a RuleOccurrence>,
}

/// The structured report document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument<'a> {
    pub extraction_date: String,
    pub total_rules: usize,
    pub summary: IndexMap<RuleCategory, usize>,
    pub categories: IndexMap<RuleCategory, CategorySection<'a>>,
    pub by_module: BTreeMap<String, ModuleTotals>,
}

/// Format a timestamp as ISO-8601 UTC with a `Z` suffix
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl<'a> ReportDocument<'a> {
    /// Build the document from an aggregate.
    ///
    /// `extracted_at` is injected so identical inputs render identically.
    pub fn build(
        aggregate: &AggregateReport<'a>,
        extracted_at: DateTime<Utc>,
        sample_limit: usize,
    ) -> Self {
        let categories = aggregate
            .categories
            .iter()
            .map(|(category, occurrences)| {
                let section = CategorySection {
                    count: occurrences.len(),
                    description: category.description(),
                    rules: occurrences.iter().take(sample_limit).copied().collect(),
                };
                (*category, section)
            })
            .collect();

        Self {
            extraction_date: format_timestamp(extracted_at),
            total_rules: aggregate.total,
            summary: aggregate.summary(),
            categories,
            by_module: aggregate.by_module.clone(),
        }
    }

    /// Full count of a category
    pub fn count(&self, category: RuleCategory) -> usize {
        self.summary.get(&category).copied().unwrap_or(0)
    }
}
