use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mentor")]
#[command(version = "0.1.0")]
#[command(about = "A module-scoped AI learning mentor for your terminal", long_about = None)]
pub struct Cli {
    /// Model to use (e.g., gpt-3.5-turbo, gpt-4o-mini)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Learning module to start with (skips the selection screen)
    #[arg(long)]
    pub module: Option<String>,

    /// Ask a single question and print the answer (requires --module)
    #[arg(short, long, requires = "module")]
    pub prompt: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,
    /// List the available learning modules
    Modules,
    /// Start a mentoring session (default)
    Chat,
    /// Show version information
    Version,
}
