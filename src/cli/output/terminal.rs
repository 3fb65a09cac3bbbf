//! Terminal output formatting with colors

use colored::Colorize;

use crate::error::ScanError;
use crate::report::{ArtifactPaths, ReportDocument};
use crate::rules::RuleCategory;
use crate::scanner::FileInfo;

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    pub fn format_header(&self, project_name: Option<&str>, root: &str) -> String {
        let title = match project_name {
            Some(name) if !name.trim().is_empty() => {
                format!("{} Business Rules Extraction", name.trim())
            }
            _ => "Business Rules Extraction".to_string(),
        };
        let width = title.chars().count().max(40) + 4;
        format!(
            "\n{}\n{}\n{}\n\n{} {}\n{} v{}\n",
            format!("╔{}╗", "═".repeat(width)).cyan(),
            format!("║  {:<w$}  ║", title, w = width - 4).cyan().bold(),
            format!("╚{}╝", "═".repeat(width)).cyan(),
            "Controllers:".dimmed(),
            root.white().bold(),
            "bizrules".dimmed(),
            env!("CARGO_PKG_VERSION")
        )
    }

    pub fn format_module_start(&self, module: &str, pattern: Option<&str>, files: usize) -> String {
        let pattern = pattern.unwrap_or("unclassified");
        format!(
            "\n{} {}\n",
            format!("{module} Module:").yellow().bold(),
            format!("({pattern}, {files} files)").dimmed()
        )
    }

    pub fn format_processing(&self, file: &FileInfo, occurrences: usize) -> String {
        format!(
            "  Processing: {} {}\n",
            file.path,
            format!("[{occurrences}]").dimmed()
        )
    }

    pub fn format_skipped(&self, file: &FileInfo, error: &ScanError) -> String {
        format!(
            "  {} {} {}\n",
            "✗".red().bold(),
            file.path.red(),
            format!("({error})").dimmed()
        )
    }

    pub fn format_summary(
        &self,
        document: &ReportDocument<'_>,
        paths: Option<&ArtifactPaths>,
        skipped: usize,
        elapsed: &str,
    ) -> String {
        let mut output = format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  EXTRACTION COMPLETE".bold()
        );

        for category in RuleCategory::ALL {
            let label = format!("{}:", category.display_name());
            output.push_str(&format!(
                "  {label:<21}{}\n",
                document.count(category).to_string().cyan()
            ));
        }
        output.push_str(&format!(
            "\n  {:<21}{}\n",
            "Total:",
            document.total_rules.to_string().green().bold()
        ));

        if skipped > 0 {
            output.push_str(&format!(
                "\n  {} {} file(s) could not be read and were skipped.\n",
                "⚠️ ".yellow(),
                skipped
            ));
        }

        if let Some(paths) = paths {
            output.push_str(&format!(
                "\n  {} {}\n  {} {}\n",
                "Report:".dimmed(),
                paths.json.display().to_string().cyan(),
                "Summary:".dimmed(),
                paths.summary.display().to_string().cyan()
            ));
        }

        output.push_str(&format!("\n  {} {}\n", "Elapsed:".dimmed(), elapsed));
        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}
