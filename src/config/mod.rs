//! Configuration module for sqlfmt.
//!
//! Handles the settings file, environment variable expansion, and custom
//! dialect profiles.

mod settings;

pub use settings::{expand_env_vars, Settings, SettingsError};
