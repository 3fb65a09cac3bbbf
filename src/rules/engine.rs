//! Extraction engine
//!
//! Drives one batch run: files are classified, grouped by the module rule that
//! claimed them, and scanned one at a time in rule order, then path order. An
//! unreadable file is logged, reported through the progress callback and
//! skipped; it never aborts the run.

use tracing::{debug, info, span, warn, Level};

use super::matcher::Matcher;
use super::modules::{ModuleClassifier, UNCLASSIFIED_MODULE};
use super::patterns::PatternCatalog;
use super::results::ExtractionResults;
use crate::config::Config;
use crate::error::{BizRulesError, ScanError};
use crate::scanner::{FileInfo, Scanner};
use crate::utils::timing::Timer;

/// Progress notifications emitted during a run
#[derive(Debug)]
pub enum ExtractionEvent<'a> {
    /// A module group is about to be scanned
    ModuleStarted {
        module: &'a str,
        pattern: Option<&'a str>,
        files: usize,
    },
    /// A file was read and matched
    FileProcessed {
        file: &'a FileInfo,
        occurrences: usize,
    },
    /// A file could not be read and was skipped
    FileSkipped {
        file: &'a FileInfo,
        error: &'a ScanError,
    },
}

/// Callback receiving [`ExtractionEvent`]s
pub type ProgressCallback = Box<dyn Fn(&ExtractionEvent<'_>)>;

/// Files claimed by one module rule
#[derive(Debug)]
pub struct ModuleGroup<'a> {
    pub module: &'a str,
    /// `None` for the unclassified group
    pub pattern: Option<&'a str>,
    pub files: Vec<&'a FileInfo>,
}

/// Main extraction engine
pub struct ExtractionEngine {
    matcher: Matcher,
    classifier: ModuleClassifier,
    include_unclassified: bool,
    progress: Option<ProgressCallback>,
}

impl ExtractionEngine {
    pub fn new(matcher: Matcher, classifier: ModuleClassifier) -> Self {
        Self {
            matcher,
            classifier,
            include_unclassified: false,
            progress: None,
        }
    }

    /// Compile the builtin catalog and the configured module rules
    pub fn from_config(config: &Config) -> Result<Self, BizRulesError> {
        let catalog = PatternCatalog::builtin()?;
        let matcher = Matcher::new(catalog).with_snippet_max_chars(config.snippet_max_chars);
        let classifier = ModuleClassifier::from_config(&config.modules)?;

        let mut engine = Self::new(matcher, classifier);
        engine.set_include_unclassified(config.include_unclassified);
        Ok(engine)
    }

    /// Scan files that match no module rule, under [`UNCLASSIFIED_MODULE`]
    pub fn set_include_unclassified(&mut self, include: bool) {
        self.include_unclassified = include;
    }

    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress = Some(callback);
    }

    fn notify(&self, event: ExtractionEvent<'_>) {
        if let Some(callback) = &self.progress {
            callback(&event);
        }
    }

    /// Group files by the first rule that matches them.
    ///
    /// Every rule gets a group, even an empty one. Unclassified files form a
    /// trailing group only when enabled and present.
    pub fn plan<'a>(&'a self, files: &'a [FileInfo]) -> Vec<ModuleGroup<'a>> {
        let mut groups: Vec<ModuleGroup<'a>> = self
            .classifier
            .rules()
            .iter()
            .map(|rule| ModuleGroup {
                module: rule.module.as_str(),
                pattern: Some(rule.pattern.as_str()),
                files: Vec::new(),
            })
            .collect();
        let mut unclassified = Vec::new();

        for file in files {
            match self.classifier.rule_index(&file.name) {
                Some(index) => groups[index].files.push(file),
                None => unclassified.push(file),
            }
        }

        if self.include_unclassified && !unclassified.is_empty() {
            groups.push(ModuleGroup {
                module: UNCLASSIFIED_MODULE,
                pattern: None,
                files: unclassified,
            });
        } else if !unclassified.is_empty() {
            debug!(count = unclassified.len(), "Ignoring unclassified files");
        }

        groups
    }

    /// Run the extraction over every file the scanner found
    pub fn run(&self, scanner: &Scanner) -> ExtractionResults {
        info!(
            root = %scanner.root().display(),
            files = scanner.all_files().len(),
            patterns = self.matcher.catalog().len(),
            "Starting extraction"
        );

        let mut results = ExtractionResults::new();

        for group in self.plan(scanner.all_files()) {
            let span = span!(Level::INFO, "module", module = group.module);
            let _guard = span.enter();

            self.notify(ExtractionEvent::ModuleStarted {
                module: group.module,
                pattern: group.pattern,
                files: group.files.len(),
            });

            let timer = Timer::start();
            let before = results.total_count();
            for file in &group.files {
                self.scan_file(scanner, file, group.module, &mut results);
            }

            debug!(
                files = group.files.len(),
                occurrences = results.total_count() - before,
                elapsed = %timer.elapsed_formatted(),
                "Module completed"
            );
        }

        info!(
            total = results.total_count(),
            scanned = results.files_scanned(),
            skipped = results.skipped_files().len(),
            "Extraction complete"
        );

        results
    }

    /// Read and match one file, appending its occurrences to `results`
    pub fn scan_file(
        &self,
        scanner: &Scanner,
        file: &FileInfo,
        module: &str,
        results: &mut ExtractionResults,
    ) {
        let content = match scanner.read_file(file) {
            Ok(content) => content,
            Err(error) => {
                warn!(file = %file.path, error = %error, "Skipping unreadable file");
                self.notify(ExtractionEvent::FileSkipped {
                    file,
                    error: &error,
                });
                results.record_skipped(&file.path, error.to_string());
                return;
            }
        };

        let occurrences = self.matcher.scan(&content, module, &file.name);
        debug!(file = %file.path, occurrences = occurrences.len(), "File scanned");
        self.notify(ExtractionEvent::FileProcessed {
            file,
            occurrences: occurrences.len(),
        });

        results.record_scanned();
        results.add_occurrences(occurrences);
    }
}
