//! Preflight stages and their outcomes.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// One of the three fixed preflight stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Local framework dependencies.
    Framework,
    /// Command availability on the nodes.
    NodeCommands,
    /// File presence on the nodes.
    NodeFiles,
}

impl Stage {
    /// All stages, in the only order they are ever run.
    pub const ALL: [Stage; 3] = [Stage::Framework, Stage::NodeCommands, Stage::NodeFiles];

    /// Key used for this stage in configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Framework => "framework",
            Self::NodeCommands => "node_commands",
            Self::NodeFiles => "node_files",
        }
    }

    /// Look up a stage by its configuration key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Short human-readable name.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Framework => "framework dependencies",
            Self::NodeCommands => "node commands",
            Self::NodeFiles => "node files",
        }
    }

    /// Message printed before the checker starts.
    pub fn start_notice(&self) -> String {
        format!("Checking {}...", self.title())
    }

    /// Message printed when the checker passed.
    pub fn success_notice(&self) -> &'static str {
        match self {
            Self::Framework => "Framework dependencies satisfied",
            Self::NodeCommands => "Node commands available",
            Self::NodeFiles => "Node files present",
        }
    }

    /// Message printed when the checker failed.
    pub fn failure_notice(&self) -> &'static str {
        match self {
            Self::Framework => "Framework dependencies check failed",
            Self::NodeCommands => "Node commands check failed",
            Self::NodeFiles => "Node files check failed",
        }
    }

    /// 1-based position in the run order.
    pub fn position(&self) -> usize {
        match self {
            Self::Framework => 1,
            Self::NodeCommands => 2,
            Self::NodeFiles => 3,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What happened when a stage's checker ran to completion.
#[derive(Debug, Clone)]
pub struct StageOutcome {
    /// The stage that ran.
    pub stage: Stage,

    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured stdout and stderr; empty when output was inherited.
    pub output: String,

    /// Execution duration.
    pub duration: Duration,
}

impl StageOutcome {
    /// Create an outcome with no captured output.
    pub fn new(stage: Stage, exit_code: Option<i32>) -> Self {
        Self {
            stage,
            exit_code,
            output: String::new(),
            duration: Duration::ZERO,
        }
    }

    /// Whether the checker reported success.
    pub fn passed(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Outcomes of every stage that ran, in run order.
#[derive(Debug, Clone, Default)]
pub struct PreflightReport {
    pub outcomes: Vec<StageOutcome>,
}

impl PreflightReport {
    /// Stages that ran, in order.
    pub fn stages(&self) -> Vec<Stage> {
        self.outcomes.iter().map(|o| o.stage).collect()
    }

    /// Total time spent in checkers.
    pub fn total_duration(&self) -> Duration {
        self.outcomes.iter().map(|o| o.duration).sum()
    }
}

/// Overall result of a preflight run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every stage passed.
    Passed,
    /// Some stage failed; later stages did not run.
    Failed,
}

impl ExitStatus {
    /// Process exit code for this status.
    pub fn code(&self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Passed)
    }
}
