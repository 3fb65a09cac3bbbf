//! Configuration module

pub mod loader;

pub use loader::{Config, CONFIG_FILENAME};

use serde::{Deserialize, Serialize};

/// Ordered module classification rule as written in `.bizrules.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRuleConfig {
    /// Glob matched against the controller file name
    pub pattern: String,

    /// Module assigned to matching files
    pub module: String,
}

impl ModuleRuleConfig {
    pub fn new(pattern: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            module: module.into(),
        }
    }
}

/// Builtin module rules, in classification order
pub fn default_module_rules() -> Vec<ModuleRuleConfig> {
    [
        ("Ap*Controller.cs", "AP"),
        ("Ar*Controller.cs", "AR"),
        ("Gl*Controller.cs", "GL"),
        ("Account*Controller.cs", "GL"),
        ("Asset*Controller.cs", "Asset"),
        ("Income*Controller.cs", "Income"),
    ]
    .into_iter()
    .map(|(pattern, module)| ModuleRuleConfig::new(pattern, module))
    .collect()
}
