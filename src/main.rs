//! # Main Entry Point
//!
//! Initializes the server using the layered architecture:
//! - Domain: Configuration, Project Root Paths, Traits
//! - Infrastructure: Unit Locators, MCP Server
//! - Application: Logging
//! - Interface: CLI and Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;

use anyhow::Result;
use clap::Parser;

use crate::domain::config::AppConfig;
use crate::infrastructure::locator::CurrentExe;
use crate::interface::cli::{Cli, Command};
use crate::interface::commands::{locate, serve};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Configuration
    let cli = Cli::parse();
    let config = cli.apply(AppConfig::load(cli.config.as_deref())?);

    // 2. Logging Setup
    let _guard = application::logging::init(&config.logging)?;
    tracing::debug!(?config, "Configuration loaded");

    // 3. Dispatch
    match cli.selected_command() {
        Command::Serve => serve::handle_serve(&config).await,
        Command::Locate => locate::handle_locate(&CurrentExe, &mut std::io::stdout().lock()),
    }
}
