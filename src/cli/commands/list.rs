//! List command implementation.
//!
//! The `depcheck list` command shows the checks in run order and the
//! command behind each one.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::{load_config, validate};
use crate::error::{DepcheckError, Result};
use crate::preflight::PreflightPlan;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        validate(&config)?;
        let plan = PreflightPlan::resolve(&config, &self.project_root);

        if self.args.json {
            let json = serde_json::to_string_pretty(&plan)
                .map_err(|e| DepcheckError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Preflight checks");
        ui.message(&format!("Working directory: {}", plan.working_dir.display()));
        ui.message("");
        for checker in &plan.checkers {
            ui.message(&format!(
                "  {}. {:<24} {}",
                checker.stage.position(),
                checker.stage.title(),
                checker.command
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preflight::default_command;
    use crate::preflight::Stage;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    /// Project whose config is passed explicitly, keeping the user's global
    /// config out of the result.
    fn setup_project(config: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".depcheck");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yml");
        fs::write(&path, config).unwrap();
        (temp, path)
    }

    #[test]
    fn list_shows_defaults_in_order() {
        let (temp, config) = setup_project("");
        let cmd = ListCommand::new(temp.path(), Some(&config), ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let lines: Vec<_> = ui
            .messages()
            .iter()
            .filter(|m| m.starts_with("  "))
            .cloned()
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("1. framework dependencies"));
        assert!(lines[0].contains(default_command(Stage::Framework)));
        assert!(lines[1].contains("2. node commands"));
        assert!(lines[2].contains("3. node files"));
    }

    #[test]
    fn list_shows_overridden_command() {
        let (temp, config) =
            setup_project("checkers:\n  node_files:\n    command: ./files.sh --all\n");
        let cmd = ListCommand::new(temp.path(), Some(&config), ListArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("./files.sh --all"));
    }

    #[test]
    fn list_json_succeeds() {
        let (temp, config) = setup_project("");
        let cmd = ListCommand::new(temp.path(), Some(&config), ListArgs { json: true });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.headers().is_empty());
    }
}
