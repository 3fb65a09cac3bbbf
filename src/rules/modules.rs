//! Module classifier
//!
//! Maps a controller file name to its business module with an ordered list of
//! glob rules. The first rule that matches wins, so rule order is significant.

use globset::{Glob, GlobMatcher};

use crate::config::ModuleRuleConfig;
use crate::error::ConfigError;

/// Module assigned to files that match no rule
pub const UNCLASSIFIED_MODULE: &str = "Unclassified";

/// A compiled (glob, module) pair
#[derive(Debug, Clone)]
pub struct ModuleRule {
    pub pattern: String,
    pub module: String,
    matcher: GlobMatcher,
}

impl ModuleRule {
    pub fn new(pattern: impl Into<String>, module: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        let matcher = Glob::new(&pattern)
            .map_err(|e| ConfigError::InvalidGlob {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?
            .compile_matcher();

        Ok(Self {
            pattern,
            module: module.into(),
            matcher,
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }
}

/// Ordered first-match-wins classifier
#[derive(Debug, Clone, Default)]
pub struct ModuleClassifier {
    rules: Vec<ModuleRule>,
}

impl ModuleClassifier {
    pub fn new(rules: Vec<ModuleRule>) -> Self {
        Self { rules }
    }

    /// Compile configured rules, keeping their order
    pub fn from_config(rules: &[ModuleRuleConfig]) -> Result<Self, ConfigError> {
        rules
            .iter()
            .map(|r| ModuleRule::new(&r.pattern, &r.module))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn rules(&self) -> &[ModuleRule] {
        &self.rules
    }

    /// Index of the first rule matching `file_name`
    pub fn rule_index(&self, file_name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(file_name))
    }

    /// Module name for `file_name`, or [`UNCLASSIFIED_MODULE`]
    pub fn classify(&self, file_name: &str) -> &str {
        self.rule_index(file_name)
            .map(|i| self.rules[i].module.as_str())
            .unwrap_or(UNCLASSIFIED_MODULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_module_rules;

    fn classifier() -> ModuleClassifier {
        ModuleClassifier::from_config(&default_module_rules()).unwrap()
    }

    #[test]
    fn test_default_rules() {
        let classifier = classifier();
        assert_eq!(classifier.classify("ApInvoiceController.cs"), "AP");
        assert_eq!(classifier.classify("ArReceiptController.cs"), "AR");
        assert_eq!(classifier.classify("GlJvController.cs"), "GL");
        assert_eq!(classifier.classify("AccountCodeController.cs"), "GL");
        assert_eq!(classifier.classify("AssetRegisterController.cs"), "Asset");
        assert_eq!(classifier.classify("IncomeRevenueController.cs"), "Income");
    }

    #[test]
    fn test_unmatched_file_is_unclassified() {
        let classifier = classifier();
        assert_eq!(classifier.classify("UserController.cs"), UNCLASSIFIED_MODULE);
        assert_eq!(classifier.classify("ApInvoiceService.cs"), UNCLASSIFIED_MODULE);
        assert_eq!(classifier.rule_index("UserController.cs"), None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(classifier().classify("apinvoicecontroller.cs"), UNCLASSIFIED_MODULE);
    }

    #[test]
    fn test_first_match_wins() {
        let classifier = ModuleClassifier::new(vec![
            ModuleRule::new("A*Controller.cs", "First").unwrap(),
            ModuleRule::new("Ap*Controller.cs", "Second").unwrap(),
        ]);
        assert_eq!(classifier.classify("ApInvoiceController.cs"), "First");
        assert_eq!(classifier.rule_index("ApInvoiceController.cs"), Some(0));
    }

    #[test]
    fn test_two_rules_may_share_a_module() {
        let classifier = classifier();
        assert_eq!(classifier.rule_index("GlJvController.cs"), Some(2));
        assert_eq!(classifier.rule_index("AccountCodeController.cs"), Some(3));
    }

    #[test]
    fn test_invalid_glob_is_rejected() {
        let err = ModuleRule::new("Ap[Controller.cs", "AP").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGlob { .. }));
    }
}
