//! Builtin business rule taxonomy
//!
//! Each category lists its expressions in matching order. Extending this table
//! is the only way to broaden detection.

use crate::rules::RuleCategory;

/// Uncompiled catalog entry
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    pub expression: &'static str,
    pub label: &'static str,
}

const fn spec(expression: &'static str, label: &'static str) -> PatternSpec {
    PatternSpec { expression, label }
}

/// Validation guards in controller actions
pub const VALIDATION: &[PatternSpec] = &[
    spec(r"ModelState\.IsValid", "Model validation check"),
    spec(r"\.IsRequired", "Required field validation"),
    spec(r"\.Length\(", "Length validation"),
    spec(r"\.Range\(", "Range validation"),
    spec(r"\.Email", "Email validation"),
    spec(r"\.RegularExpression", "Regex validation"),
    spec(
        r"if\s*\([^)]*[<>=!]+[^)]*\)\s*return\s+this\.JsonResultBadRequest",
        "Business rule validation",
    ),
];

/// Amount and aggregate computations
pub const CALCULATION: &[PatternSpec] = &[
    spec(r"decimal\s+\w+\s*=.*[\+\-\*/]", "Decimal calculation"),
    spec(r"TotalAmt\s*=", "Total amount calculation"),
    spec(r"NetAmt\s*=", "Net amount calculation"),
    spec(r"TaxAmt\s*=", "Tax amount calculation"),
    spec(r"\.Sum\(", "Sum aggregation"),
    spec(r"\.Average\(", "Average calculation"),
    spec(r"\.Calculate", "Custom calculation"),
];

/// RBAC lookups and permission flags
pub const PERMISSION: &[PatternSpec] = &[
    spec(
        r#"FncPermission\.GetPermissionInfoByPermissionNameAsync\(["']([^"']+)["']\)"#,
        "Permission check",
    ),
    spec(r"permission\.View", "View permission check"),
    spec(r"permission\.Create", "Create permission check"),
    spec(r"permission\.Update", "Update permission check"),
    spec(r"permission\.Delete", "Delete permission check"),
    spec(r"permission\.Approve", "Approve permission check"),
    spec(r"permission\.Post", "Post permission check"),
    spec(r"permission\.Close", "Close permission check"),
    spec(r"JsonResultForbidden", "Forbidden response"),
];

/// Status checks and document transitions
pub const WORKFLOW: &[PatternSpec] = &[
    spec(r"\.Status\s*==\s*(\d+)", "Status check"),
    spec(r"\.Status\s*!=\s*(\d+)", "Status validation"),
    spec(r"WorkflowStatus", "Workflow status"),
    spec(r"ApprovalStatus", "Approval status"),
    spec(r"\.Approve\(", "Approve action"),
    spec(r"\.Reject\(", "Reject action"),
    spec(r"\.Submit\(", "Submit action"),
];

/// Tax fields
pub const TAX: &[PatternSpec] = &[
    spec(r"TaxAmt", "Tax amount"),
    spec(r"TaxRate", "Tax rate"),
    spec(r"WhtAmt|WHT", "Withholding tax"),
    spec(r"VatAmt|VAT", "VAT"),
];

/// Cross-cutting concerns, matched without regard to case
pub const BUSINESS_LOGIC: &[PatternSpec] = &[
    spec(r"FncBase\.ApplyTenantIfUseTenant", "Multi-tenant isolation"),
    spec(r"LogHttpRequest", "Request logging"),
    spec(r"LogHttpResult\.Error", "Error logging"),
    spec(r"using\s*\(.*transaction.*\)", "Transaction usage"),
];

/// The full taxonomy in catalog order
pub const TAXONOMY: &[(RuleCategory, &[PatternSpec])] = &[
    (RuleCategory::Validation, VALIDATION),
    (RuleCategory::Calculation, CALCULATION),
    (RuleCategory::Permission, PERMISSION),
    (RuleCategory::Workflow, WORKFLOW),
    (RuleCategory::Tax, TAX),
    (RuleCategory::BusinessLogic, BUSINESS_LOGIC),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_covers_every_category_once() {
        let categories: Vec<_> = TAXONOMY.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, RuleCategory::ALL);
    }

    #[test]
    fn test_labels_are_unique_within_category() {
        for (category, specs) in TAXONOMY {
            let mut labels: Vec<_> = specs.iter().map(|s| s.label).collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), specs.len(), "duplicate label in {category}");
        }
    }
}
