//! Pattern catalog
//!
//! Compiles the declarative [`taxonomy`] table into regular expressions once at
//! startup. A malformed expression is a fatal [`CatalogError`].

pub mod taxonomy;

use regex::{Regex, RegexBuilder};

use crate::error::CatalogError;
use crate::rules::RuleCategory;

pub use taxonomy::{PatternSpec, TAXONOMY};

/// A compiled catalog entry
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub category: RuleCategory,
    pub label: &'static str,
    pub expression: &'static str,
    pub regex: Regex,
}

impl PatternEntry {
    /// Compile a [`PatternSpec`] for the given category
    pub fn compile(category: RuleCategory, spec: &PatternSpec) -> Result<Self, CatalogError> {
        let regex = RegexBuilder::new(spec.expression)
            .case_insensitive(category.is_case_insensitive())
            .build()
            .map_err(|source| CatalogError::InvalidPattern {
                category: category.name(),
                label: spec.label,
                source,
            })?;

        Ok(Self {
            category,
            label: spec.label,
            expression: spec.expression,
            regex,
        })
    }
}

/// Ordered, read-only mapping from category to its compiled entries
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    categories: Vec<(RuleCategory, Vec<PatternEntry>)>,
}

impl PatternCatalog {
    /// Compile the builtin taxonomy
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::compile(TAXONOMY)
    }

    /// Compile an arbitrary table, keeping its order
    pub fn compile(table: &[(RuleCategory, &[PatternSpec])]) -> Result<Self, CatalogError> {
        let categories = table
            .iter()
            .map(|(category, specs)| {
                let entries = specs
                    .iter()
                    .map(|spec| PatternEntry::compile(*category, spec))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((*category, entries))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { categories })
    }

    /// Iterate categories in catalog order
    pub fn categories(&self) -> impl Iterator<Item = (RuleCategory, &[PatternEntry])> {
        self.categories
            .iter()
            .map(|(category, entries)| (*category, entries.as_slice()))
    }

    /// Entries of one category, empty if the category is absent
    pub fn entries(&self, category: RuleCategory) -> &[PatternEntry] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.categories.iter().map(|(_, e)| e.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
