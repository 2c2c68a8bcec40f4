//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use roles_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::AdminRoles { command } => {
            commands::admin_roles::run(config, command, cli.output).await?;
        }
        Commands::ControlRoles { command } => {
            commands::control_roles::run(config, command, cli.output).await?;
        }
    }

    Ok(())
}
