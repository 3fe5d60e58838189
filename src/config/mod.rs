//! Configuration loading, parsing, and validation for depcheck.
//!
//! Configuration only says where the checkers live and how to run them;
//! the set of stages and their order are fixed.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Configuration File Locations
//!
//! depcheck discovers and merges configuration in this order:
//! 1. User global config (`~/.depcheck/config.yml`)
//! 2. Project config (`.depcheck/config.yml`)
//! 3. Local overrides (`.depcheck/config.local.yml`)
//!
//! None of them is required.

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{CheckerConfig, DepcheckConfig, OutputMode, Settings};

pub use loader::{
    load_config, load_config_file, load_config_value, load_discovered_config, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};
