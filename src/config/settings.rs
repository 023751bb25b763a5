//! Configuration settings structures for notifier-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, LogFormat, LoggerConfig};
use crate::services::notifications::{ChannelType, SinkKind};

// ============================================================================
// Default value functions
// ============================================================================

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_channels() -> Vec<String> {
    vec!["email".to_string(), "sms".to_string()]
}

fn default_sink() -> String {
    "console".to_string()
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: ConsoleSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    ///
    /// This method transforms the configuration file representation into
    /// the runtime LoggerConfig used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self.parse_format()?;
        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);

        LoggerConfig::new(console, format, self.level).map_err(|e| ConfigError::ValidationError {
            field: "logger".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse the format string into LogFormat enum
    pub(crate) fn parse_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Notification Settings
// ============================================================================

/// Notification channel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Channels registered for broadcasts, in order: "email", "sms"
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,

    /// Where deliveries are emitted: "console", "log", or "json"
    #[serde(default = "default_sink")]
    pub sink: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            sink: default_sink(),
        }
    }
}

impl NotificationSettings {
    /// Resolve the configured channel names, preserving order and duplicates
    pub fn channel_types(&self) -> Result<Vec<ChannelType>, ConfigError> {
        self.channels
            .iter()
            .enumerate()
            .map(|(i, name)| {
                name.parse::<ChannelType>()
                    .map_err(|e| ConfigError::ValidationError {
                        field: format!("notifications.channels[{}]", i),
                        message: e.to_string(),
                    })
            })
            .collect()
    }

    /// Resolve the configured sink
    pub fn sink_kind(&self) -> Result<SinkKind, ConfigError> {
        self.sink
            .parse::<SinkKind>()
            .map_err(|e| ConfigError::ValidationError {
                field: "notifications.sink".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,

    /// Notification configuration
    #[serde(default)]
    pub notifications: NotificationSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.logger.level, "info");
        assert_eq!(settings.logger.format, "full");
        assert!(settings.logger.console.enabled);
        assert_eq!(settings.notifications.channels, vec!["email", "sms"]);
        assert_eq!(settings.notifications.sink, "console");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [notifications]
            channels = ["sms"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.notifications.channels, vec!["sms"]);
        assert_eq!(settings.notifications.sink, "console");
        assert_eq!(settings.logger, LoggerSettings::default());
    }

    #[test]
    fn test_channel_types_preserve_order_and_duplicates() {
        let settings = NotificationSettings {
            channels: vec!["sms".into(), "email".into(), "sms".into()],
            ..NotificationSettings::default()
        };

        assert_eq!(
            settings.channel_types().unwrap(),
            vec![ChannelType::Sms, ChannelType::Email, ChannelType::Sms]
        );
    }

    #[test]
    fn test_channel_types_reports_bad_index() {
        let settings = NotificationSettings {
            channels: vec!["email".into(), "telegram".into()],
            ..NotificationSettings::default()
        };

        match settings.channel_types() {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "notifications.channels[1]")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_into_logger_config() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            format: "json".to_string(),
            console: ConsoleSettings {
                enabled: true,
                colored: false,
            },
        };

        let config = settings.into_logger_config().unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.console.colored);
    }

    #[test]
    fn test_into_logger_config_rejects_bad_format() {
        let settings = LoggerSettings {
            format: "yaml".to_string(),
            ..LoggerSettings::default()
        };
        assert!(settings.into_logger_config().is_err());
    }

    fn arb_channel_name() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["email", "sms", "EMAIL", "Sms"]).prop_map(String::from)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Settings survive a TOML round trip
        #[test]
        fn property_settings_toml_roundtrip(
            channels in prop::collection::vec(arb_channel_name(), 1..6),
            sink in prop::sample::select(vec!["console", "log", "json"]),
            level in prop::sample::select(vec!["trace", "debug", "info", "warn", "error"]),
        ) {
            let settings = Settings {
                logger: LoggerSettings { level: level.to_string(), ..LoggerSettings::default() },
                notifications: NotificationSettings { channels, sink: sink.to_string() },
            };

            let encoded = toml::to_string(&settings).unwrap();
            let decoded: Settings = toml::from_str(&encoded).unwrap();
            prop_assert_eq!(&decoded, &settings);
            prop_assert!(decoded.validate().is_ok());
        }
    }
}
