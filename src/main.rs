use clap::Parser;
use notifier_rs::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;
    debug!(?settings, "Configuration loaded");

    execute_command(&cli, settings)?;

    Ok(())
}
