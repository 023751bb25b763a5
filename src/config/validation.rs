//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{LoggerSettings, NotificationSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of trace, debug, info, warn, error
    /// - Format must be one of full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level".to_string(),
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        self.parse_format()?;
        Ok(())
    }
}

impl NotificationSettings {
    /// Validate notification configuration
    ///
    /// # Validation Rules
    /// - At least one channel must be configured
    /// - Every channel name must be known
    /// - Sink must be one of console, log, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channels.is_empty() {
            return Err(ConfigError::validation(
                "notifications.channels",
                "At least one notification channel must be configured.",
            ));
        }

        self.channel_types()?;
        self.sink_kind()?;
        Ok(())
    }
}

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logger.validate()?;
        self.notifications.validate()?;
        Ok(())
    }
}
