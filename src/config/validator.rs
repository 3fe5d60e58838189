//! Configuration validation rules.
//!
//! - Checker keys must name one of the three stages
//! - A configured command must not be blank

use crate::config::schema::DepcheckConfig;
use crate::error::{DepcheckError, Result};
use crate::preflight::Stage;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &DepcheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (key, checker) in &config.checkers {
        if Stage::from_key(key).is_none() {
            let known: Vec<_> = Stage::ALL.iter().map(|s| s.key()).collect();
            errors.push(ValidationError {
                rule: "unknown-checker".to_string(),
                message: format!(
                    "Unknown checker '{}' (expected one of: {})",
                    key,
                    known.join(", ")
                ),
            });
        }

        if let Some(command) = &checker.command {
            if command.trim().is_empty() {
                errors.push(ValidationError {
                    rule: "empty-command".to_string(),
                    message: format!("Checker '{}' has an empty command", key),
                });
            }
        }
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &DepcheckConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(DepcheckError::ConfigValidationError { message })
}
