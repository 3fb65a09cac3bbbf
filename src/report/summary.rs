//! Plain-text summary artifact

use std::fmt::Write;

use super::ReportDocument;
use crate::rules::RuleCategory;

/// Header line, optionally prefixed with the project name
pub fn summary_title(project_name: Option<&str>) -> String {
    match project_name {
        Some(name) if !name.trim().is_empty() => {
            format!("{} Business Rules Extraction Summary", name.trim())
        }
        _ => "Business Rules Extraction Summary".to_string(),
    }
}

/// Render the summary: header, total, category counts, module totals.
///
/// Modules are listed in lexicographic order.
pub fn render_summary(document: &ReportDocument<'_>, project_name: Option<&str>) -> String {
    let title = summary_title(project_name);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Extraction Date: {}", document.extraction_date);
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Rules Extracted: {}", document.total_rules);
    let _ = writeln!(out);

    let _ = writeln!(out, "By Category:");
    let _ = writeln!(out, "------------");
    for category in RuleCategory::ALL {
        let label = format!("{}:", category.display_name());
        let _ = writeln!(out, "{label:<21}{}", document.count(category));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "By Module:");
    let _ = writeln!(out, "----------");
    for (module, totals) in &document.by_module {
        let _ = writeln!(out, "{module}: {} rules", totals.total);
    }

    out
}
