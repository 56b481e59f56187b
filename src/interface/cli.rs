//! # Command Line
//!
//! Argument definitions. Flags given here override values from `config.yaml`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "project-directory", version, about = "MCP server reporting the project root directory")]
pub struct Cli {
    /// Path to a config.yaml file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "info,rmcp=debug"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Directory for the session log file
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the print_current_directory tool over stdio (default)
    Serve,
    /// Print the project root once and exit
    Locate,
}

impl Cli {
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }

    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.logging.dir = Some(dir.clone());
        }
        config
    }
}
