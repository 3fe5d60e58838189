//! Error types for depcheck operations.
//!
//! This module defines [`DepcheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing preflight stage is reported as [`DepcheckError::StageFailed`]
//!   or [`DepcheckError::StageLaunchFailed`]; both name the stage
//! - Configuration problems get their own variants so the CLI can explain them
//! - Use `anyhow::Error` (via `DepcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::preflight::Stage;

/// Core error type for depcheck operations.
#[derive(Debug, Error)]
pub enum DepcheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A checker ran and reported a non-zero status.
    #[error("{} (exit code {})", notice(.stage), display_code(.code))]
    StageFailed { stage: Stage, code: Option<i32> },

    /// A checker could not be started at all.
    #[error("{}: could not run '{command}': {message}", notice(.stage))]
    StageLaunchFailed {
        stage: Stage,
        command: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DepcheckError {
    /// The stage this error belongs to, if it is a stage failure.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::StageFailed { stage, .. } | Self::StageLaunchFailed { stage, .. } => {
                Some(*stage)
            }
            _ => None,
        }
    }
}

fn notice(stage: &Stage) -> &'static str {
    stage.failure_notice()
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "none, terminated by signal".to_string(),
    }
}

/// Result type alias for depcheck operations.
pub type Result<T> = std::result::Result<T, DepcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = DepcheckError::ConfigNotFound {
            path: PathBuf::from("/foo/bar.yml"),
        };
        assert!(err.to_string().contains("/foo/bar.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DepcheckError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn stage_failed_names_stage_and_code() {
        let err = DepcheckError::StageFailed {
            stage: Stage::NodeCommands,
            code: Some(3),
        };
        let msg = err.to_string();
        assert!(msg.contains("Node commands check failed"));
        assert!(msg.contains("exit code 3"));
    }

    #[test]
    fn stage_failed_without_code_mentions_signal() {
        let err = DepcheckError::StageFailed {
            stage: Stage::Framework,
            code: None,
        };
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn stage_launch_failed_names_command() {
        let err = DepcheckError::StageLaunchFailed {
            stage: Stage::NodeFiles,
            command: "./missing.py".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Node files check failed"));
        assert!(msg.contains("./missing.py"));
    }

    #[test]
    fn stage_accessor() {
        let err = DepcheckError::StageFailed {
            stage: Stage::NodeFiles,
            code: Some(1),
        };
        assert_eq!(err.stage(), Some(Stage::NodeFiles));

        let err = DepcheckError::ConfigValidationError {
            message: "x".into(),
        };
        assert_eq!(err.stage(), None);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DepcheckError = io_err.into();
        assert!(matches!(err, DepcheckError::Io(_)));
    }
}
