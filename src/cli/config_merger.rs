//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};
use crate::services::notifications::{ChannelType, SinkKind};
use std::path::Path;

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// CLI arguments override configuration file and environment values.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading configuration from the specified path or default loader
    ///
    /// # Arguments
    /// * `config_path` - Optional path to configuration file. If None, uses default loader behavior
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_config_path(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let loader = match config_path {
            Some(path) => ConfigLoader::new().with_file(path),
            None => ConfigLoader::new(),
        };

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if let Some(level) = cli.log_level_override() {
            config.logger.level = level.to_string();
        }

        if let Some(sink) = cli.sink {
            config.notifications.sink = SinkKind::from(sink).as_str().to_string();
        }

        if let Some(Commands::Broadcast { channels, .. }) = &cli.command
            && !channels.is_empty()
        {
            config.notifications.channels = channels
                .iter()
                .map(|c| ChannelType::from(*c).as_str().to_string())
                .collect();
        }

        // Validate the merged configuration
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn merge(args: &[&str]) -> Settings {
        let cli = Cli::try_parse_from(args).unwrap();
        ConfigurationMerger::new(Settings::default())
            .merge_cli_args(&cli)
            .unwrap()
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        assert_eq!(merge(&["notifier-rs"]), Settings::default());
    }

    #[test]
    fn test_verbose_and_quiet_set_level() {
        assert_eq!(merge(&["notifier-rs", "--verbose"]).logger.level, "debug");
        assert_eq!(merge(&["notifier-rs", "--quiet"]).logger.level, "error");
    }

    #[test]
    fn test_sink_override() {
        assert_eq!(
            merge(&["notifier-rs", "--sink", "log"]).notifications.sink,
            "log"
        );
    }

    #[test]
    fn test_broadcast_channels_override() {
        let settings = merge(&[
            "notifier-rs",
            "broadcast",
            "--to",
            "ops",
            "-m",
            "hi",
            "--channel",
            "sms",
        ]);
        assert_eq!(settings.notifications.channels, vec!["sms"]);
    }

    #[test]
    fn test_broadcast_without_channels_keeps_configured() {
        let settings = merge(&["notifier-rs", "broadcast", "--to", "ops", "-m", "hi"]);
        assert_eq!(settings.notifications.channels, vec!["email", "sms"]);
    }
}
