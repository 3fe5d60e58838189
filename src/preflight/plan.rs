//! Resolving configuration into concrete checker invocations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::DepcheckConfig;

use super::Stage;

/// Built-in checker command for a stage.
pub fn default_command(stage: Stage) -> &'static str {
    match stage {
        Stage::Framework => "./check_deps/check_framework_deps.sh",
        Stage::NodeCommands => "./check_deps/check_node_commands.py",
        Stage::NodeFiles => "./check_deps/check_node_files.py",
    }
}

/// A checker ready to run.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedChecker {
    pub stage: Stage,
    pub command: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

/// The three checkers in run order, plus where they run.
#[derive(Debug, Clone, Serialize)]
pub struct PreflightPlan {
    pub working_dir: PathBuf,
    pub checkers: Vec<ResolvedChecker>,
}

impl PreflightPlan {
    /// Apply configuration overrides on top of the built-in defaults.
    pub fn resolve(config: &DepcheckConfig, project_root: &Path) -> Self {
        let working_dir = match &config.settings.working_dir {
            Some(dir) => project_root.join(dir),
            None => project_root.to_path_buf(),
        };

        let checkers = Stage::ALL
            .into_iter()
            .map(|stage| {
                let over = config.checker(stage);
                ResolvedChecker {
                    stage,
                    command: over
                        .and_then(|c| c.command.clone())
                        .unwrap_or_else(|| default_command(stage).to_string()),
                    env: over.map(|c| c.env.clone()).unwrap_or_default(),
                }
            })
            .collect();

        Self {
            working_dir,
            checkers,
        }
    }

    /// The checker for a stage.
    pub fn checker(&self, stage: Stage) -> Option<&ResolvedChecker> {
        self.checkers.iter().find(|c| c.stage == stage)
    }
}
