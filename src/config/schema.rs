//! Configuration schema definitions for depcheck.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::preflight::Stage;

/// Root configuration structure for `.depcheck/config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DepcheckConfig {
    /// Global settings
    pub settings: Settings,

    /// Checker overrides, keyed by stage (`framework`, `node_commands`, `node_files`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub checkers: BTreeMap<String, CheckerConfig>,
}

impl DepcheckConfig {
    /// Checker override for a stage, if one is configured.
    pub fn checker(&self, stage: Stage) -> Option<&CheckerConfig> {
        self.checkers.get(stage.key())
    }
}

/// Global settings that apply to every checker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, quiet, silent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,

    /// Directory checkers run in (relative to project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

/// Output mode options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Verbose,
    Quiet,
    Silent,
}

/// Override for a single checker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Shell command line that runs the checker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Extra environment variables for the checker
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: DepcheckConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.checkers.is_empty());
        assert!(config.settings.default_output.is_none());
        assert!(config.settings.working_dir.is_none());
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
settings:
  default_output: quiet
  working_dir: tests
checkers:
  framework:
    command: ./deps.sh --strict
  node_files:
    command: python3 files.py
    env:
      NODES: "a,b"
"#;
        let config: DepcheckConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.settings.default_output, Some(OutputMode::Quiet));
        assert_eq!(config.settings.working_dir, Some(PathBuf::from("tests")));
        assert_eq!(
            config.checker(Stage::Framework).unwrap().command.as_deref(),
            Some("./deps.sh --strict")
        );
        assert!(config.checker(Stage::NodeCommands).is_none());
        let files = config.checker(Stage::NodeFiles).unwrap();
        assert_eq!(files.env.get("NODES"), Some(&"a,b".to_string()));
    }

    #[test]
    fn rejects_unknown_output_mode() {
        let yaml = "settings:\n  default_output: loud\n";
        assert!(serde_yaml::from_str::<DepcheckConfig>(yaml).is_err());
    }
}
