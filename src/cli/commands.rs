use anyhow::Result;
use colored::Colorize;

use crate::{app::init_config, catalog};

use super::Commands;

/// Handle CLI subcommands. Returns true when the command was fully handled
/// and the process should exit instead of starting a chat session.
pub fn handle_command(command: &Commands) -> Result<bool> {
    match command {
        Commands::Init => {
            println!("Initializing Mentor configuration...");
            init_config()?;
            println!("Configuration initialized successfully!");
            Ok(true)
        }
        Commands::Modules => {
            list_modules();
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
        Commands::Chat => Ok(false), // Continue to the chat interface
    }
}

/// List the available learning modules
pub fn list_modules() {
    println!("Available learning modules:");
    for module in catalog::all() {
        println!("  • {} — {}", module.name.green(), module.domain);
    }
}

/// Show version information
pub fn show_version() {
    println!("Mentor v{}", env!("CARGO_PKG_VERSION"));
    println!("   A module-scoped AI learning mentor for your terminal");
}
