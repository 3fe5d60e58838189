//! Sequential preflight dependency checks.
//!
//! Three external checkers run in a fixed order:
//! 1. [`Stage::Framework`] - local framework dependencies
//! 2. [`Stage::NodeCommands`] - commands available on the nodes
//! 3. [`Stage::NodeFiles`] - files present on the nodes
//!
//! The first non-zero exit status ends the run; later checkers never start.
//!
//! # Example
//!
//! ```
//! use depcheck::preflight::{ExitStatus, PreflightChecker, ScriptedInvoker, Stage};
//! use depcheck::ui::MockUI;
//!
//! let invoker = ScriptedInvoker::new().exit_with(Stage::NodeCommands, Some(1));
//! let mut checker = PreflightChecker::new(invoker);
//! let mut ui = MockUI::new();
//!
//! assert_eq!(checker.run(&mut ui), ExitStatus::Failed);
//! assert_eq!(
//!     checker.invoker().invoked(),
//!     &[Stage::Framework, Stage::NodeCommands]
//! );
//! ```

pub mod checker;
pub mod invoker;
pub mod plan;
pub mod stage;

pub use checker::PreflightChecker;
pub use invoker::{ProcessInvoker, ScriptedInvoker, StageInvoker};
pub use plan::{default_command, PreflightPlan, ResolvedChecker};
pub use stage::{ExitStatus, PreflightReport, Stage, StageOutcome};
