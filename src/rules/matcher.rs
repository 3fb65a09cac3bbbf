//! Matcher engine
//!
//! Applies every catalog entry to a file's full text. Matches of one entry never
//! overlap each other; matches of different entries or categories may, and
//! they are all reported.

use super::category::DetailKind;
use super::patterns::{PatternCatalog, PatternEntry};
use super::results::{RuleDetail, RuleOccurrence};

/// Default snippet length, in characters
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 100;

/// Newline offsets of a text, for offset to line lookups
struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let newlines = text
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .map(|(i, _)| i)
            .collect();
        Self { newlines }
    }

    /// Newlines before `offset`, plus one
    fn line_of(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&nl| nl < offset) + 1
    }
}

/// Truncate to at most `max` characters
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

/// Scans file contents against a compiled catalog
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: PatternCatalog,
    snippet_max_chars: usize,
}

impl Matcher {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self {
            catalog,
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
        }
    }

    pub fn with_snippet_max_chars(mut self, max: usize) -> Self {
        self.snippet_max_chars = max;
        self
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Scan one file.
    ///
    /// Occurrences come out in catalog order: category, then entry, then match
    /// position. `file` is the basename recorded on each occurrence.
    pub fn scan(&self, content: &str, module: &str, file: &str) -> Vec<RuleOccurrence> {
        let lines = LineIndex::new(content);
        let mut occurrences = Vec::new();

        for (_, entries) in self.catalog.categories() {
            for entry in entries {
                for caps in entry.regex.captures_iter(content) {
                    let Some(whole) = caps.get(0) else {
                        continue;
                    };
                    let detail = self.detail_for(entry, whole.as_str(), caps.get(1));
                    occurrences.push(
                        RuleOccurrence::new(
                            entry.category,
                            module,
                            file,
                            lines.line_of(whole.start()),
                            entry.label,
                        )
                        .with_detail(detail),
                    );
                }
            }
        }

        occurrences
    }

    fn detail_for(
        &self,
        entry: &PatternEntry,
        matched: &str,
        group: Option<regex::Match<'_>>,
    ) -> RuleDetail {
        match entry.category.detail_kind() {
            DetailKind::Pattern => RuleDetail::Pattern(entry.expression.to_string()),
            DetailKind::Snippet => {
                RuleDetail::Snippet(truncate_chars(matched, self.snippet_max_chars))
            }
            DetailKind::Capture => {
                RuleDetail::Permission(group.map(|g| g.as_str().to_string()))
            }
            DetailKind::None => RuleDetail::None,
        }
    }
}
