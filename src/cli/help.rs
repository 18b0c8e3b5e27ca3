//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string used as the `command` field on log events.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Plan { .. } => "plan",
    }
}
