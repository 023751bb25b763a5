//! Configuration loader for notifier-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for a specific configuration file
const CONFIG_FILE_ENV: &str = "NOTIFIER_CONFIG_FILE";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "NOTIFIER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. Built-in defaults
/// 2. A TOML configuration file (optional)
/// 3. `NOTIFIER_*` environment variables (highest priority)
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Specific configuration file path
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// Picks up `NOTIFIER_CONFIG_FILE` when it is set.
    pub fn new() -> Self {
        Self {
            config_file: std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from),
        }
    }

    /// Use `path` as the configuration file, overriding `NOTIFIER_CONFIG_FILE`
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Get the configuration file path, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file was given but does not exist
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        // Validate the loaded settings
        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref config_file) = self.config_file {
            if !config_file.exists() {
                return Err(ConfigError::file_not_found(format!(
                    "Required configuration file not found: {}",
                    config_file.display()
                )));
            }
            let path = config_file.to_str().ok_or_else(|| {
                ConfigError::ParseError(format!(
                    "Configuration path is not valid UTF-8: {}",
                    config_file.display()
                ))
            })?;
            builder = builder.add_source(File::new(path, FileFormat::Toml).required(true));
        }

        // Environment variables are case-insensitive and converted to lowercase
        // NOTIFIER_LOGGER__LEVEL -> logger.level
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("notifications.channels"),
        );

        builder.build().map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Global mutex to ensure tests run sequentially to avoid env var conflicts
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("notifier.toml");
        fs::write(&path, content).expect("Failed to write config file");
        (temp_dir, path)
    }

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original) in self.vars_to_restore.drain(..).rev() {
                unsafe {
                    match original {
                        Some(value) => std::env::set_var(&key, value),
                        None => std::env::remove_var(&key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_load_defaults_without_file() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let settings = ConfigLoader::default().load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let (_dir, path) = write_config(
            r#"
            [logger]
            level = "debug"

            [notifications]
            channels = ["sms", "email"]
            sink = "json"
            "#,
        );

        let loader = ConfigLoader::default().with_file(&path);
        assert_eq!(loader.config_file(), Some(path.as_path()));

        let settings = loader.load().unwrap();
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.notifications.channels, vec!["sms", "email"]);
        assert_eq!(settings.notifications.sink, "json");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let result = ConfigLoader::default()
            .with_file("/definitely/not/here/notifier.toml")
            .load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_file_values_fail_validation() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let (_dir, path) = write_config(
            r#"
            [notifications]
            channels = ["carrier-pigeon"]
            "#,
        );

        let result = ConfigLoader::default().with_file(&path).load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_env_overrides_file() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let (_dir, path) = write_config(
            r#"
            [logger]
            level = "debug"
            "#,
        );
        let mut env = EnvGuard::new();
        env.set("NOTIFIER_LOGGER__LEVEL", "warn");
        env.set("NOTIFIER_NOTIFICATIONS__CHANNELS", "sms,email,sms");

        let settings = ConfigLoader::default().with_file(&path).load().unwrap();
        assert_eq!(settings.logger.level, "warn");
        assert_eq!(settings.notifications.channels, vec!["sms", "email", "sms"]);
    }

    #[test]
    fn test_new_reads_config_file_env() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.set(CONFIG_FILE_ENV, "/etc/notifier/custom.toml");

        let loader = ConfigLoader::new();
        assert_eq!(
            loader.config_file(),
            Some(Path::new("/etc/notifier/custom.toml"))
        );
    }
}
