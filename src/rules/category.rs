//! Rule categories
//!
//! The taxonomy is closed: every occurrence belongs to exactly one of the six
//! categories below, and reports always list them in this order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a detected business rule.
///
/// The declaration order is the catalog order used for matching and for every
/// report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Input validation and business rule guards
    Validation,
    /// Financial calculations
    Calculation,
    /// Authorization checks
    Permission,
    /// Status transitions and approval flows
    Workflow,
    /// Tax computations
    Tax,
    /// Cross-cutting logic: tenancy, logging, transactions
    BusinessLogic,
}

/// What extra detail an occurrence of a category carries in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    /// The source text of the matching expression
    Pattern,
    /// A truncated copy of the matched text
    Snippet,
    /// The first capture group, if the expression has one
    Capture,
    /// Nothing beyond the location
    None,
}

impl RuleCategory {
    /// All categories in catalog order
    pub const ALL: [RuleCategory; 6] = [
        RuleCategory::Validation,
        RuleCategory::Calculation,
        RuleCategory::Permission,
        RuleCategory::Workflow,
        RuleCategory::Tax,
        RuleCategory::BusinessLogic,
    ];

    /// Machine name, as used for report keys
    pub fn name(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Calculation => "calculation",
            Self::Permission => "permission",
            Self::Workflow => "workflow",
            Self::Tax => "tax",
            Self::BusinessLogic => "business_logic",
        }
    }

    /// Heading used in human-readable summaries
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Validation => "Validation Rules",
            Self::Calculation => "Calculation Rules",
            Self::Permission => "Permission Checks",
            Self::Workflow => "Workflow Rules",
            Self::Tax => "Tax Rules",
            Self::BusinessLogic => "Business Logic",
        }
    }

    /// Description written into the report document
    pub fn description(self) -> &'static str {
        match self {
            Self::Validation => "Input validation, business rule validation, data integrity checks",
            Self::Calculation => "Financial calculations, totals, averages, formula-based rules",
            Self::Permission => "RBAC permission checks, authorization rules",
            Self::Workflow => "State transitions, approval workflows, status-based logic",
            Self::Tax => "Tax calculations, WHT, VAT, tax rate applications",
            Self::BusinessLogic => "Multi-tenant isolation, logging, transactions",
        }
    }

    /// Only business logic patterns ignore case.
    pub fn is_case_insensitive(self) -> bool {
        matches!(self, Self::BusinessLogic)
    }

    /// Detail attached to occurrences of this category
    pub fn detail_kind(self) -> DetailKind {
        match self {
            Self::Validation => DetailKind::Pattern,
            Self::Calculation | Self::Workflow => DetailKind::Snippet,
            Self::Permission => DetailKind::Capture,
            Self::Tax | Self::BusinessLogic => DetailKind::None,
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
