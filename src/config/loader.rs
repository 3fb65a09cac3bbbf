//! Configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BizRulesError, ConfigError};
use crate::rules::matcher::DEFAULT_SNIPPET_MAX_CHARS;
use crate::rules::modules::ModuleClassifier;

use super::{default_module_rules, ModuleRuleConfig};

pub const CONFIG_FILENAME: &str = ".bizrules.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name used in the summary header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Directory scanned for controllers
    pub controllers_dir: PathBuf,

    /// Directory receiving the report artifacts
    pub output_dir: PathBuf,

    /// Descend into subdirectories of `controllers_dir`
    pub recursive: bool,

    /// Scan files that match no module rule
    pub include_unclassified: bool,

    /// Occurrences listed per category in the JSON report
    pub sample_limit: usize,

    /// Snippet truncation length, in characters
    pub snippet_max_chars: usize,

    /// Module rules, first match wins
    pub modules: Vec<ModuleRuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: None,
            controllers_dir: PathBuf::from("Carmen.WebApi/Controllers"),
            output_dir: PathBuf::from("analysis/business-rules"),
            recursive: false,
            include_unclassified: false,
            sample_limit: 50,
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
            modules: default_module_rules(),
        }
    }
}

impl Config {
    /// Load `explicit` if given, else `.bizrules.toml` in `base_dir`, else defaults
    pub fn load(explicit: Option<&Path>, base_dir: &Path) -> Result<Self, BizRulesError> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => {
                let path = base_dir.join(CONFIG_FILENAME);
                if path.exists() {
                    Self::load_from_file(&path)?
                } else {
                    debug!("No configuration file found, using defaults");
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, BizRulesError> {
        let content = fs::read_to_string(path).map_err(|e| {
            BizRulesError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        debug!(path = %path.display(), "Loaded configuration");
        toml::from_str(&content).map_err(Into::into)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, BizRulesError> {
        toml::to_string_pretty(self).map_err(|e| {
            BizRulesError::Config(ConfigError::Serialize {
                message: e.to_string(),
            })
        })
    }

    /// Reject values that would corrupt every scan
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sample_limit",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.snippet_max_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "snippet_max_chars",
                message: "must be greater than zero".to_string(),
            });
        }
        if let Some(rule) = self.modules.iter().find(|r| r.module.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "modules",
                message: format!("rule '{}' has an empty module name", rule.pattern),
            });
        }

        ModuleClassifier::from_config(&self.modules).map(|_| ())
    }

    /// Resolve `path` against `base_dir` unless it is absolute
    pub fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sample_limit, 50);
        assert_eq!(config.snippet_max_chars, 100);
        assert_eq!(config.modules.len(), 6);
        assert!(!config.recursive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let toml_content = r#"
project_name = "Carmen.NET"
controllers_dir = "src/Controllers"
sample_limit = 10
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.project_name.as_deref(), Some("Carmen.NET"));
        assert_eq!(config.controllers_dir, PathBuf::from("src/Controllers"));
        assert_eq!(config.sample_limit, 10);
        assert_eq!(config.output_dir, PathBuf::from("analysis/business-rules"));
        assert_eq!(config.modules, default_module_rules());
    }

    #[test]
    fn test_module_rules_replace_defaults_in_order() {
        let toml_content = r#"
[[modules]]
pattern = "Po*Controller.cs"
module = "PO"

[[modules]]
pattern = "*Controller.cs"
module = "Other"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.modules,
            vec![
                ModuleRuleConfig::new("Po*Controller.cs", "PO"),
                ModuleRuleConfig::new("*Controller.cs", "Other"),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let config = Config {
            sample_limit: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "sample_limit",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let config = Config {
            modules: vec![ModuleRuleConfig::new("Ap[*.cs", "AP")],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGlob { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_module() {
        let config = Config {
            modules: vec![ModuleRuleConfig::new("Ap*.cs", " ")],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_prefers_file_in_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "recursive = true\n").unwrap();

        let config = Config::load(None, temp_dir.path()).unwrap();
        assert!(config.recursive);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = Config::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "sample_limit = \"many\"").unwrap();
        assert!(Config::load(None, temp_dir.path()).is_err());
    }

    #[test]
    fn test_resolve() {
        let base = Path::new("/work");
        assert_eq!(
            Config::resolve(base, Path::new("out")),
            PathBuf::from("/work/out")
        );
        assert_eq!(
            Config::resolve(base, Path::new("/abs")),
            PathBuf::from("/abs")
        );
    }
}
