//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{BroadcastCommandHandler, DemoCommandHandler, SendCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};

/// Execute a CLI command with the given settings
///
/// Runs the demo when no subcommand was given.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Merged and validated settings
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    if let Err(msg) = cli.validate() {
        return Err(AppError::validation("cli_arguments", msg));
    }

    let mut stdout = std::io::stdout();

    match &cli.command {
        Some(Commands::Demo) | None => DemoCommandHandler::from_settings(&settings)?.execute(&mut stdout),
        Some(Commands::Send {
            channel,
            to,
            message,
        }) => SendCommandHandler::from_settings(&settings)?.execute((*channel).into(), to, message),
        Some(Commands::Broadcast { to, message, .. }) => {
            BroadcastCommandHandler::from_settings(&settings)?
                .execute(&mut stdout, to, message)
                .map(|_| ())
        }
    }
}
