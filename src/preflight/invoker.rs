//! Running the external checker behind a stage.

use std::collections::HashMap;

use crate::error::{DepcheckError, Result};
use crate::shell::{self, CommandOptions};

use super::plan::PreflightPlan;
use super::{Stage, StageOutcome};

/// Runs the checker for one stage and reports how it exited.
///
/// Implementations block until the checker finishes.
pub trait StageInvoker {
    /// Run the checker for `stage`.
    ///
    /// Returns `Err` only when the checker could not be started; a checker
    /// that runs and exits non-zero is an `Ok` outcome.
    fn invoke(&mut self, stage: Stage) -> Result<StageOutcome>;

    /// Command line shown to the user for `stage`.
    fn describe(&self, stage: Stage) -> String {
        stage.key().to_string()
    }
}

/// Invokes checkers as shell commands according to a [`PreflightPlan`].
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    plan: PreflightPlan,
    capture_output: bool,
}

impl ProcessInvoker {
    /// Create an invoker whose checkers inherit stdout and stderr.
    pub fn new(plan: PreflightPlan) -> Self {
        Self {
            plan,
            capture_output: false,
        }
    }

    /// Capture checker output instead of passing it through.
    pub fn with_captured_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }
}

impl StageInvoker for ProcessInvoker {
    fn invoke(&mut self, stage: Stage) -> Result<StageOutcome> {
        let checker = self.plan.checker(stage).ok_or_else(|| {
            DepcheckError::Other(anyhow::anyhow!("no checker configured for {}", stage))
        })?;

        let options = CommandOptions {
            cwd: Some(self.plan.working_dir.clone()),
            env: checker.env.clone(),
            capture_output: self.capture_output,
        };

        tracing::debug!(
            "Running {} checker: {} (in {})",
            stage,
            checker.command,
            self.plan.working_dir.display()
        );

        let result = shell::execute(&checker.command, &options).map_err(|e| {
            tracing::warn!("Could not start {} checker: {}", stage, e);
            DepcheckError::StageLaunchFailed {
                stage,
                command: checker.command.clone(),
                message: match e {
                    DepcheckError::Io(io) => io.to_string(),
                    other => other.to_string(),
                },
            }
        })?;

        tracing::debug!(
            "{} checker exited with {:?} after {:?}",
            stage,
            result.exit_code,
            result.duration
        );

        Ok(StageOutcome {
            stage,
            exit_code: result.exit_code,
            output: result.combined_output(),
            duration: result.duration,
        })
    }

    fn describe(&self, stage: Stage) -> String {
        self.plan
            .checker(stage)
            .map(|c| c.command.clone())
            .unwrap_or_else(|| stage.key().to_string())
    }
}

/// Invoker with canned exit codes that records what it was asked to run.
///
/// Stages without a scripted code pass. Useful for exercising the checker
/// without spawning processes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInvoker {
    codes: HashMap<Stage, Option<i32>>,
    unlaunchable: Vec<Stage>,
    invoked: Vec<Stage>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `stage` exit with `code` (None = killed by signal).
    pub fn exit_with(mut self, stage: Stage, code: Option<i32>) -> Self {
        self.codes.insert(stage, code);
        self
    }

    /// Make `stage` fail to start.
    pub fn unlaunchable(mut self, stage: Stage) -> Self {
        self.unlaunchable.push(stage);
        self
    }

    /// Stages invoked so far, in order.
    pub fn invoked(&self) -> &[Stage] {
        &self.invoked
    }
}

impl StageInvoker for ScriptedInvoker {
    fn invoke(&mut self, stage: Stage) -> Result<StageOutcome> {
        self.invoked.push(stage);

        if self.unlaunchable.contains(&stage) {
            return Err(DepcheckError::StageLaunchFailed {
                stage,
                command: stage.key().to_string(),
                message: "scripted launch failure".to_string(),
            });
        }

        let code = self.codes.get(&stage).copied().unwrap_or(Some(0));
        Ok(StageOutcome::new(stage, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DepcheckConfig;
    use std::fs;
    use tempfile::TempDir;

    fn plan_with(temp: &TempDir, yaml: &str) -> PreflightPlan {
        let config: DepcheckConfig = serde_yaml::from_str(yaml).unwrap();
        PreflightPlan::resolve(&config, temp.path())
    }

    #[test]
    fn scripted_defaults_to_pass() {
        let mut invoker = ScriptedInvoker::new();
        let outcome = invoker.invoke(Stage::Framework).unwrap();

        assert!(outcome.passed());
        assert_eq!(invoker.invoked(), &[Stage::Framework]);
    }

    #[test]
    fn scripted_returns_configured_code() {
        let mut invoker = ScriptedInvoker::new().exit_with(Stage::NodeFiles, Some(4));

        let outcome = invoker.invoke(Stage::NodeFiles).unwrap();
        assert_eq!(outcome.exit_code, Some(4));
    }

    #[test]
    fn scripted_unlaunchable_is_error() {
        let mut invoker = ScriptedInvoker::new().unlaunchable(Stage::NodeCommands);

        let err = invoker.invoke(Stage::NodeCommands).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::NodeCommands));
    }

    #[test]
    fn process_invoker_reports_exit_code() {
        let temp = TempDir::new().unwrap();
        let plan = plan_with(
            &temp,
            "checkers:\n  framework:\n    command: exit 0\n  node_commands:\n    command: exit 5\n",
        );
        let mut invoker = ProcessInvoker::new(plan).with_captured_output(true);

        assert!(invoker.invoke(Stage::Framework).unwrap().passed());
        assert_eq!(
            invoker.invoke(Stage::NodeCommands).unwrap().exit_code,
            Some(5)
        );
    }

    #[test]
    #[cfg(unix)]
    fn process_invoker_runs_in_working_dir_with_env() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("suite")).unwrap();
        fs::write(temp.path().join("suite").join("here.txt"), "").unwrap();
        let plan = plan_with(
            &temp,
            r#"
settings:
  working_dir: suite
checkers:
  node_files:
    command: test -f here.txt && echo "nodes=$NODES"
    env:
      NODES: n1
"#,
        );
        let mut invoker = ProcessInvoker::new(plan).with_captured_output(true);

        let outcome = invoker.invoke(Stage::NodeFiles).unwrap();
        assert!(outcome.passed());
        assert!(outcome.output.contains("nodes=n1"));
    }

    #[test]
    fn process_invoker_missing_working_dir_is_launch_failure() {
        let temp = TempDir::new().unwrap();
        let plan = plan_with(&temp, "settings:\n  working_dir: missing\n");
        let mut invoker = ProcessInvoker::new(plan);

        let err = invoker.invoke(Stage::Framework).unwrap_err();
        assert!(matches!(
            err,
            DepcheckError::StageLaunchFailed {
                stage: Stage::Framework,
                ..
            }
        ));
    }

    #[test]
    fn describe_shows_resolved_command() {
        let temp = TempDir::new().unwrap();
        let plan = plan_with(&temp, "checkers:\n  framework:\n    command: ./deps.sh\n");
        let invoker = ProcessInvoker::new(plan);

        assert_eq!(invoker.describe(Stage::Framework), "./deps.sh");
    }
}
