//! Aggregation over extraction results
//!
//! [`AggregateReport`] is a read-only view borrowed from [`ExtractionResults`].
//! Counts are exact cardinalities; sampling for display happens later in the
//! report builder and never feeds back into these numbers.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

use super::results::{ExtractionResults, RuleOccurrence};
use super::RuleCategory;

/// Per-module counts, one per category plus their sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleTotals {
    #[serde(flatten)]
    pub counts: IndexMap<RuleCategory, usize>,
    pub total: usize,
}

impl ModuleTotals {
    fn empty() -> Self {
        Self {
            counts: RuleCategory::ALL.into_iter().map(|c| (c, 0)).collect(),
            total: 0,
        }
    }

    pub fn count(&self, category: RuleCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }
}

/// Aggregated view of a run
#[derive(Debug, Clone)]
pub struct AggregateReport<'a> {
    /// Every occurrence of each category, in discovery order
    pub categories: IndexMap<RuleCategory, Vec<&'a RuleOccurrence>>,
    /// Counts for each module that has at least one occurrence
    pub by_module: BTreeMap<String, ModuleTotals>,
    pub total: usize,
}

impl<'a> AggregateReport<'a> {
    /// Aggregate the flat list and the grouped index of `results`
    pub fn from_results(results: &'a ExtractionResults) -> Self {
        let mut categories: IndexMap<RuleCategory, Vec<&'a RuleOccurrence>> = RuleCategory::ALL
            .into_iter()
            .map(|c| (c, Vec::new()))
            .collect();
        for occurrence in results.occurrences() {
            categories
                .entry(occurrence.category)
                .or_default()
                .push(occurrence);
        }

        let by_module = results
            .modules()
            .map(|module| {
                let mut totals = ModuleTotals::empty();
                for category in RuleCategory::ALL {
                    let count = results.occurrences_for(module, category).count();
                    totals.counts.insert(category, count);
                    totals.total += count;
                }
                (module.to_string(), totals)
            })
            .collect();

        let total = categories.values().map(Vec::len).sum();

        Self {
            categories,
            by_module,
            total,
        }
    }

    /// Full count of a category
    pub fn count(&self, category: RuleCategory) -> usize {
        self.categories.get(&category).map(Vec::len).unwrap_or(0)
    }

    /// Category counts in catalog order
    pub fn summary(&self) -> IndexMap<RuleCategory, usize> {
        self.categories
            .iter()
            .map(|(category, occurrences)| (*category, occurrences.len()))
            .collect()
    }

    pub fn module(&self, name: &str) -> Option<&ModuleTotals> {
        self.by_module.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::results::RuleOccurrence;
    use pretty_assertions::assert_eq;

    fn results() -> ExtractionResults {
        let mut results = ExtractionResults::new();
        results.add_occurrences(vec![
            RuleOccurrence::new(RuleCategory::Tax, "AP", "ApA.cs", 1, "Tax amount"),
            RuleOccurrence::new(RuleCategory::Validation, "AP", "ApA.cs", 2, "Email validation"),
            RuleOccurrence::new(RuleCategory::Tax, "GL", "GlB.cs", 5, "VAT"),
            RuleOccurrence::new(RuleCategory::Workflow, "GL", "GlB.cs", 6, "Submit action"),
            RuleOccurrence::new(RuleCategory::Tax, "AP", "ApC.cs", 9, "Tax rate"),
        ]);
        results
    }

    #[test]
    fn test_counts_and_totals() {
        let results = results();
        let aggregate = AggregateReport::from_results(&results);

        assert_eq!(aggregate.total, 5);
        assert_eq!(aggregate.count(RuleCategory::Tax), 3);
        assert_eq!(aggregate.count(RuleCategory::Permission), 0);

        let ap = aggregate.module("AP").unwrap();
        assert_eq!(ap.count(RuleCategory::Tax), 2);
        assert_eq!(ap.count(RuleCategory::Validation), 1);
        assert_eq!(ap.total, 3);
        assert_eq!(aggregate.module("GL").unwrap().total, 2);
        assert!(aggregate.module("AR").is_none());
    }

    #[test]
    fn test_module_sums_match_category_counts() {
        let results = results();
        let aggregate = AggregateReport::from_results(&results);

        for category in RuleCategory::ALL {
            let across_modules: usize = aggregate
                .by_module
                .values()
                .map(|m| m.count(category))
                .sum();
            assert_eq!(across_modules, aggregate.count(category));
        }
        for totals in aggregate.by_module.values() {
            assert_eq!(totals.total, totals.counts.values().sum::<usize>());
        }
    }

    #[test]
    fn test_category_lists_keep_discovery_order() {
        let results = results();
        let aggregate = AggregateReport::from_results(&results);
        let lines: Vec<_> = aggregate.categories[&RuleCategory::Tax]
            .iter()
            .map(|o| o.line)
            .collect();
        assert_eq!(lines, vec![1, 5, 9]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let results = results();
        let first = AggregateReport::from_results(&results);
        let second = AggregateReport::from_results(&results);
        assert_eq!(first.summary(), second.summary());
        assert_eq!(first.by_module, second.by_module);
    }

    #[test]
    fn test_empty_results() {
        let results = ExtractionResults::new();
        let aggregate = AggregateReport::from_results(&results);
        assert_eq!(aggregate.total, 0);
        assert!(aggregate.by_module.is_empty());
        assert_eq!(aggregate.summary().len(), 6);
    }

    #[test]
    fn test_module_totals_serialize_flat() {
        let results = results();
        let aggregate = AggregateReport::from_results(&results);
        let json = serde_json::to_string(aggregate.module("GL").unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"validation":0,"calculation":0,"permission":0,"workflow":1,"tax":1,"business_logic":0,"total":2}"#
        );
    }
}
