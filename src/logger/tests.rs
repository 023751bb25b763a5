//! Tests for the logger module

use crate::logger::config::*;
use crate::logger::capture::CapturedWriter;
use crate::logger::{LoggerError, build_filter, build_subscriber, init_logger};

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_config_creation() {
        let config = LoggerConfig::default();
        assert!(config.console.enabled);
        assert!(config.console.colored);
        assert_eq!(config.format, LogFormat::Full);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_config_validation() {
        let mut config = LoggerConfig::default();
        assert!(config.validate().is_ok());

        config.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_init_rejects_invalid_level() {
        let config = LoggerConfig {
            level: "nope".to_string(),
            ..LoggerConfig::default()
        };
        assert!(matches!(init_logger(config), Err(LoggerError::Config { .. })));
    }

    #[test]
    fn test_init_with_console_disabled_is_noop() {
        let config = LoggerConfig {
            console: ConsoleConfig::new(false, false),
            ..LoggerConfig::default()
        };
        assert!(init_logger(config).is_ok());
    }

    #[test]
    fn test_subscriber_writes_to_given_writer() {
        let output = CapturedWriter::default();
        let config = LoggerConfig {
            format: LogFormat::Json,
            ..LoggerConfig::default()
        };
        let subscriber = build_subscriber(&config, false, output.clone()).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(channel = "sms", "Message sent");
            tracing::debug!("filtered out at info");
        });

        let lines: Vec<serde_json::Value> = output
            .contents()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["fields"]["message"], "Message sent");
        assert_eq!(lines[0]["fields"]["channel"], "sms");
    }

    #[test]
    fn test_full_format_has_no_ansi_when_disabled() {
        let output = CapturedWriter::default();
        let subscriber = build_subscriber(&LoggerConfig::default(), false, output.clone()).unwrap();

        tracing::subscriber::with_default(subscriber, || tracing::warn!("plain line"));

        let contents = output.contents();
        assert!(contents.contains("WARN"));
        assert!(contents.contains("plain line"));
        assert!(!contents.contains('\u{1b}'));
    }

    #[test]
    fn test_build_filter() {
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("notifier_rs=trace").is_ok());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Level parsing is case-insensitive for every known level
        #[test]
        fn property_levels_case_insensitive(
            level in prop::sample::select(vec!["trace", "debug", "info", "warn", "error"]),
            upper in any::<bool>(),
        ) {
            let level = if upper { level.to_uppercase() } else { level.to_string() };
            let config = LoggerConfig { level, ..LoggerConfig::default() };
            prop_assert!(config.parse_level().is_ok());
        }

        /// Default values are valid for every format
        #[test]
        fn property_config_defaults_are_valid(
            format in prop::sample::select(vec![LogFormat::Full, LogFormat::Compact, LogFormat::Json]),
        ) {
            let config = LoggerConfig { format, ..LoggerConfig::default() };
            prop_assert!(config.validate().is_ok());
        }
    }
}
