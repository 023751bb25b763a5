//! Configuration management module for notifier-rs
//!
//! This module provides layered configuration loading with support for:
//! - Built-in defaults for every setting
//! - An optional TOML configuration file
//! - Environment variable overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. Defaults compiled into [`Settings`]
//! 2. The file given with `--config` or `NOTIFIER_CONFIG_FILE`
//! 3. `NOTIFIER_*` environment variables

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{LoggerSettings, NotificationSettings, Settings};
