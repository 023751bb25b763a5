//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output on stderr with color control
//! - Full, Compact and JSON formats
//! - Level filtering through `EnvFilter`
//!
//! Log lines go to stderr so stdout carries only delivery output.

pub mod config;
pub mod error;

#[cfg(test)]
pub(crate) mod capture;
#[cfg(test)]
mod tests;

// Re-export main types
pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize the logger with the given configuration
///
/// Fails if the configuration is invalid or a global subscriber is
/// already installed.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config
        .validate()
        .map_err(|e| LoggerError::config(e.to_string()))?;

    if !config.console.enabled {
        return Ok(());
    }

    let use_ansi = config.console.colored && std::io::stderr().is_terminal();
    build_subscriber(&config, use_ansi, std::io::stderr)?
        .try_init()
        .map_err(|e| LoggerError::init(e.to_string()))
}

/// Build the subscriber for `config`, formatting into `writer`
pub(crate) fn build_subscriber<W>(
    config: &LoggerConfig,
    use_ansi: bool,
    writer: W,
) -> Result<Box<dyn Subscriber + Send + Sync>, LoggerError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_filter(&config.level)?);

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.format {
        LogFormat::Full => Box::new(
            registry.with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true)
                    .with_writer(writer),
            ),
        ),
        LogFormat::Compact => Box::new(
            registry.with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .compact()
                    .with_writer(writer),
            ),
        ),
        LogFormat::Json => Box::new(
            registry.with(fmt::layer().with_ansi(false).json().with_writer(writer)),
        ),
    };

    Ok(subscriber)
}

/// Build the level filter, failing on directives EnvFilter rejects
pub(crate) fn build_filter(level: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(level).map_err(|e| LoggerError::format(e.to_string()))
}
