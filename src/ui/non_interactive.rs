//! Non-interactive UI for CI/headless environments.

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain, uncolored lines to stdout so that logs stay readable.
/// Errors are written to stdout too, keeping every notice of a run in one
/// stream and in order.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        println!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        println!("    ┌─ Command ──────────────────────────");
        println!("    │ {}", command);
        if !output.is_empty() {
            println!("    ├─ Output ───────────────────────────");
            for line in output.lines() {
                println!("    │ {}", line);
            }
        }
        println!("    └────────────────────────────────────");
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("  {}", msg);
        }
    }
}
