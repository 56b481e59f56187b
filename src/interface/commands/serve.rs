//! # Serve Command
//!
//! Runs the MCP server on stdio with the running executable as the unit.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::infrastructure::locator::CurrentExe;
use crate::infrastructure::mcp::{DirectoryServer, serve_stdio};

pub async fn handle_serve(config: &AppConfig) -> Result<()> {
    let server = DirectoryServer::new(Arc::new(CurrentExe), config.server.clone());
    serve_stdio(server).await
}
