//! Run command implementation.
//!
//! The `depcheck run` command runs the three preflight checkers in order.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{load_config, validate, ConfigPaths};
use crate::error::Result;
use crate::preflight::{PreflightChecker, PreflightPlan, ProcessInvoker};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Config files this run reads, in merge order.
    fn config_sources(&self) -> Vec<PathBuf> {
        match &self.config_override {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    fn show_dry_run(&self, plan: &PreflightPlan, ui: &mut dyn UserInterface) {
        ui.message("Running in dry-run mode; no checkers will be executed");
        ui.message(&format!("Working directory: {}", plan.working_dir.display()));
        let total = plan.checkers.len();
        for checker in &plan.checkers {
            ui.message(&format!(
                "[{}/{}] {}: {}",
                checker.stage.position(),
                total,
                checker.stage.title(),
                checker.command
            ));
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        validate(&config)?;

        // Flags win; the config default only applies when no flag was given
        if ui.output_mode() == OutputMode::Normal {
            if let Some(mode) = config.settings.default_output {
                ui.set_output_mode(mode.into());
            }
        }

        let plan = PreflightPlan::resolve(&config, &self.project_root);

        for source in self.config_sources() {
            ui.detail(&format!("Config: {}", source.display()));
        }
        ui.detail(&format!("Working directory: {}", plan.working_dir.display()));
        if !plan.working_dir.is_dir() {
            ui.warning(&format!(
                "Working directory {} does not exist",
                plan.working_dir.display()
            ));
        }

        if self.args.dry_run {
            self.show_dry_run(&plan, ui);
            return Ok(CommandResult::success());
        }

        let capture = !ui.output_mode().passes_through_checker_output();
        let invoker = ProcessInvoker::new(plan).with_captured_output(capture);
        let status = PreflightChecker::new(invoker).run(ui);

        if status.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(status.code()))
        }
    }
}
