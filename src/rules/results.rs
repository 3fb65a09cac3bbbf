//! # Extraction Results
//!
//! This module defines the data structures produced by a scan.
//!
//! ## Overview
//!
//! - [`RuleOccurrence`] - One match of one catalog entry in one file
//! - [`RuleDetail`] - Optional detail attached to an occurrence
//! - [`ExtractionResults`] - Flat occurrence list plus the per-module index
//!
//! ## Examples
//!
//! ```rust
//! use bizrules::rules::results::{ExtractionResults, RuleDetail, RuleOccurrence};
//! use bizrules::rules::RuleCategory;
//!
//! let mut results = ExtractionResults::new();
//! results.add_occurrences(vec![
//!     RuleOccurrence::new(RuleCategory::Tax, "AP", "ApInvoiceController.cs", 12, "Tax amount"),
//!     RuleOccurrence::new(RuleCategory::Tax, "GL", "GlJvController.cs", 3, "VAT"),
//! ]);
//!
//! assert_eq!(results.count_by_category(RuleCategory::Tax), 2);
//! assert_eq!(results.occurrences_for("AP", RuleCategory::Tax).count(), 1);
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use super::RuleCategory;

/// Detail carried by an occurrence beyond its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleDetail {
    /// Source text of the expression that matched
    Pattern(String),
    /// Truncated matched text
    Snippet(String),
    /// Captured permission name, `None` when the expression has no group
    Permission(Option<String>),
    /// No detail
    None,
}

/// A single detected rule.
///
/// Serialized as `{type, module, file, line}` followed by the detail key of
/// its category (`pattern`, `code_snippet` or `permission`), if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOccurrence {
    pub category: RuleCategory,
    pub module: String,
    /// Basename of the source file
    pub file: String,
    /// 1-based line of the first matched character
    pub line: usize,
    pub label: &'static str,
    pub detail: RuleDetail,
}

impl RuleOccurrence {
    /// Create an occurrence without detail
    pub fn new(
        category: RuleCategory,
        module: impl Into<String>,
        file: impl Into<String>,
        line: usize,
        label: &'static str,
    ) -> Self {
        Self {
            category,
            module: module.into(),
            file: file.into(),
            line,
            label,
            detail: RuleDetail::None,
        }
    }

    /// Set the detail
    pub fn with_detail(mut self, detail: RuleDetail) -> Self {
        self.detail = detail;
        self
    }
}

impl Serialize for RuleOccurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.detail == RuleDetail::None { 4 } else { 5 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", self.label)?;
        map.serialize_entry("module", &self.module)?;
        map.serialize_entry("file", &self.file)?;
        map.serialize_entry("line", &self.line)?;
        match &self.detail {
            RuleDetail::Pattern(pattern) => map.serialize_entry("pattern", pattern)?,
            RuleDetail::Snippet(snippet) => map.serialize_entry("code_snippet", snippet)?,
            RuleDetail::Permission(name) => map.serialize_entry("permission", name)?,
            RuleDetail::None => {}
        }
        map.end()
    }
}

/// A file that could not be read and contributed nothing
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Accumulated output of an extraction run.
///
/// Occurrences are appended in discovery order. The grouped index stores
/// positions into the flat list, keyed by module then category, so both views
/// share the same occurrences.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResults {
    occurrences: Vec<RuleOccurrence>,
    by_module: BTreeMap<String, IndexMap<RuleCategory, Vec<usize>>>,
    files_scanned: usize,
    skipped: Vec<SkippedFile>,
}

impl ExtractionResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append occurrences, indexing each under its module and category
    pub fn add_occurrences(&mut self, occurrences: impl IntoIterator<Item = RuleOccurrence>) {
        for occurrence in occurrences {
            let index = self.occurrences.len();
            self.by_module
                .entry(occurrence.module.clone())
                .or_default()
                .entry(occurrence.category)
                .or_default()
                .push(index);
            self.occurrences.push(occurrence);
        }
    }

    /// Count a file that was read and matched
    pub fn record_scanned(&mut self) {
        self.files_scanned += 1;
    }

    /// Remember a file that was skipped
    pub fn record_skipped(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            path: path.into(),
            reason: reason.into(),
        });
    }

    /// All occurrences in discovery order
    pub fn occurrences(&self) -> &[RuleOccurrence] {
        &self.occurrences
    }

    /// Occurrences of one category, in discovery order
    pub fn occurrences_by_category(
        &self,
        category: RuleCategory,
    ) -> impl Iterator<Item = &RuleOccurrence> {
        self.occurrences
            .iter()
            .filter(move |o| o.category == category)
    }

    /// Occurrences of one category within one module
    pub fn occurrences_for<'a>(
        &'a self,
        module: &str,
        category: RuleCategory,
    ) -> impl Iterator<Item = &'a RuleOccurrence> {
        self.by_module
            .get(module)
            .and_then(|categories| categories.get(&category))
            .into_iter()
            .flatten()
            .map(move |&index| &self.occurrences[index])
    }

    pub fn count_by_category(&self, category: RuleCategory) -> usize {
        self.occurrences_by_category(category).count()
    }

    /// Modules with at least one occurrence, sorted by name
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.by_module.keys().map(String::as_str)
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn skipped_files(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn total_count(&self) -> usize {
        self.occurrences.len()
    }
}
