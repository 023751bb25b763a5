//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::services::notifications::{ChannelType, SinkKind};

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// Dispatch notifications over email and SMS
#[derive(Parser, Debug)]
#[command(name = "notifier-rs")]
#[command(about = "Dispatch notifications over email and SMS")]
#[command(long_about = "
notifier-rs delivers messages through interchangeable notification channels
(email, SMS) and can broadcast one message over every configured channel.
No real transport is involved: deliveries are emitted to the console, to the
log, or as JSON lines.

EXAMPLES:
    # Run the built-in demonstration
    notifier-rs

    # Send one message over a single channel
    notifier-rs send --channel sms --to +37398672145 --message \"Hello Bob\"

    # Broadcast over every configured channel
    notifier-rs broadcast --to admin@example.com --message \"Maintenance at midnight\"

    # Use a custom configuration file and emit JSON lines
    notifier-rs --config notifier.toml --sink json broadcast --to ops --message hi
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// TOML file with [logger] and [notifications] sections.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/notifier-rs/notifier.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Where deliveries are emitted
    ///
    /// Overrides `notifications.sink` from the configuration.
    #[arg(short, long, value_enum)]
    pub sink: Option<SinkArg>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in demonstration (default)
    ///
    /// Sends a standalone email and SMS, notifies two users, then broadcasts a
    /// maintenance notice over email and SMS.
    Demo,

    /// Send one message over a single channel
    ///
    /// Examples:
    ///   notifier-rs send --channel email --to alice@example.com --message "Hi"
    Send {
        /// Channel to deliver through
        #[arg(long, value_enum)]
        channel: ChannelArg,

        /// Recipient identifier (email address, phone number)
        #[arg(long, value_name = "RECIPIENT", value_parser = super::validation::validate_non_empty)]
        to: String,

        /// Message content
        #[arg(short, long, value_parser = super::validation::validate_non_empty)]
        message: String,
    },

    /// Broadcast one message over every configured channel
    ///
    /// Channels come from `notifications.channels` unless given with --channel.
    ///
    /// Examples:
    ///   notifier-rs broadcast --to admin@example.com --message "Deploy done"
    ///   notifier-rs broadcast --channel sms --channel sms --to +1555 --message twice
    Broadcast {
        /// Recipient identifier
        #[arg(long, value_name = "RECIPIENT", value_parser = super::validation::validate_non_empty)]
        to: String,

        /// Message content
        #[arg(short, long, value_parser = super::validation::validate_non_empty)]
        message: String,

        /// Channels to register, in order (repeatable)
        #[arg(long = "channel", value_enum)]
        channels: Vec<ChannelArg>,
    },
}

/// Channel options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelArg {
    #[value(name = "email", alias = "mail")]
    Email,
    #[value(name = "sms", alias = "text")]
    Sms,
}

/// Sink options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkArg {
    #[value(name = "console")]
    Console,
    #[value(name = "log")]
    Log,
    #[value(name = "json")]
    Json,
}

impl Cli {
    /// Log level implied by --verbose / --quiet, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }

    /// Validate CLI arguments beyond what clap checks
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }
}

impl From<ChannelArg> for ChannelType {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Email => ChannelType::Email,
            ChannelArg::Sms => ChannelType::Sms,
        }
    }
}

impl From<SinkArg> for SinkKind {
    fn from(arg: SinkArg) -> Self {
        match arg {
            SinkArg::Console => SinkKind::Console,
            SinkArg::Log => SinkKind::Log,
            SinkArg::Json => SinkKind::Json,
        }
    }
}
