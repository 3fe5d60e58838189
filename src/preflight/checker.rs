//! The sequential preflight checker.

use crate::error::{DepcheckError, Result};
use crate::ui::UserInterface;

use super::invoker::StageInvoker;
use super::{ExitStatus, PreflightReport, Stage, StageOutcome};

/// Runs framework, node-commands and node-files checks in that order,
/// stopping at the first failure.
pub struct PreflightChecker<I> {
    invoker: I,
}

impl<I: StageInvoker> PreflightChecker<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub fn into_invoker(self) -> I {
        self.invoker
    }

    /// Run every stage and print progress; `Failed` means some stage failed
    /// and the stages after it never ran.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> ExitStatus {
        match self.check_all(ui) {
            Ok(report) => {
                tracing::debug!(
                    "All {} stages passed in {:?}",
                    report.outcomes.len(),
                    report.total_duration()
                );
                ui.success("All dependency checks passed");
                ExitStatus::Passed
            }
            Err(err) => {
                if let Some(stage) = err.stage() {
                    tracing::debug!("Stopping after failed stage {}", stage);
                }
                ui.error(&err.to_string());
                ExitStatus::Failed
            }
        }
    }

    /// Run the three stages, returning the first failure as an error.
    pub fn check_all(&mut self, ui: &mut dyn UserInterface) -> Result<PreflightReport> {
        let mut report = PreflightReport::default();

        report.outcomes.push(self.check_stage(Stage::Framework, ui)?);
        report.outcomes.push(self.check_stage(Stage::NodeCommands, ui)?);
        report.outcomes.push(self.check_stage(Stage::NodeFiles, ui)?);

        Ok(report)
    }

    fn check_stage(&mut self, stage: Stage, ui: &mut dyn UserInterface) -> Result<StageOutcome> {
        ui.message(&stage.start_notice());
        ui.detail(&format!("$ {}", self.invoker.describe(stage)));

        let outcome = self.invoker.invoke(stage)?;
        ui.detail(&format!("Finished in {:.2?}", outcome.duration));

        if !outcome.passed() {
            if !outcome.output.trim().is_empty() {
                ui.show_error_block(&self.invoker.describe(stage), &outcome.output);
            }
            return Err(DepcheckError::StageFailed {
                stage,
                code: outcome.exit_code,
            });
        }

        ui.success(stage.success_notice());
        Ok(outcome)
    }
}
