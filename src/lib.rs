//! depcheck - Preflight dependency checks for a test framework and its nodes.
//!
//! depcheck runs three external checkers in a fixed order: the local
//! framework dependency check, then the node command check, then the node
//! file check. The first failure ends the run with exit status 1; if all
//! three pass the exit status is 0.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Locating the checkers (YAML configuration)
//! - [`error`] - Error types and result aliases
//! - [`preflight`] - Stage sequencing and checker invocation
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use depcheck::preflight::{ExitStatus, PreflightChecker, ScriptedInvoker, Stage};
//! use depcheck::ui::MockUI;
//!
//! let mut checker = PreflightChecker::new(ScriptedInvoker::new());
//! let mut ui = MockUI::new();
//!
//! assert_eq!(checker.run(&mut ui), ExitStatus::Passed);
//! assert_eq!(checker.invoker().invoked(), &Stage::ALL);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod preflight;
pub mod shell;
pub mod ui;

pub use error::{DepcheckError, Result};
