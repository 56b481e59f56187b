use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::router::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    transport::stdio,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::config::ServerConfig;
use crate::domain::paths::LocateError;
use crate::domain::traits::UnitLocator;

pub const TOOL_NAME: &str = "print_current_directory";

const DEFAULT_INSTRUCTIONS: &str =
    "Call print_current_directory to get the absolute path of the project root directory.";

/// MCP server exposing the project root of the running unit.
///
/// Holds no mutable state; every call re-resolves the unit location.
#[derive(Clone)]
pub struct DirectoryServer {
    locator: Arc<dyn UnitLocator>,
    config: ServerConfig,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DirectoryServer {
    pub fn new(locator: Arc<dyn UnitLocator>, config: ServerConfig) -> Self {
        Self {
            locator,
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Resolves the project root as text.
    ///
    /// Non UTF-8 path bytes are replaced with U+FFFD.
    pub fn report_current_directory(&self) -> Result<String, LocateError> {
        let root = self.locator.project_root()?;
        Ok(root.to_string_lossy().into_owned())
    }

    #[tool(
        name = "print_current_directory",
        description = "Print the path of the current project root directory"
    )]
    async fn print_current_directory(&self) -> Result<CallToolResult, McpError> {
        match self.report_current_directory() {
            Ok(root) => {
                debug!(root = %root, "Reported project root");
                Ok(CallToolResult::success(vec![Content::text(root)]))
            }
            Err(err) => {
                warn!(error = %err, "Failed to resolve project root");
                Err(locate_error(err))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for DirectoryServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = self
            .config
            .instructions
            .clone()
            .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string());

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(instructions),
            ..Default::default()
        }
    }
}

/// Maps a locate failure onto a JSON-RPC internal error carrying its kind.
fn locate_error(err: LocateError) -> McpError {
    let data = match &err {
        LocateError::LocationResolution { .. } => json!({ "kind": err.kind() }),
        LocateError::PathBounds { path, depth } => json!({
            "kind": err.kind(),
            "path": path.display().to_string(),
            "depth": depth,
        }),
    };
    McpError::internal_error(err.to_string(), Some(data))
}

/// Runs the server on stdin/stdout until the peer disconnects or Ctrl-C.
pub async fn serve_stdio(server: DirectoryServer) -> Result<()> {
    info!(name = %server.config.name, tool = TOOL_NAME, "Starting MCP server on stdio");

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {:?}", e);
    })?;

    tokio::select! {
        reason = service.waiting() => {
            let reason = reason?;
            info!(?reason, "MCP server stopped");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            // dropping the running service cancels it
            info!("Received Ctrl-C, shutting down");
        }
    }

    Ok(())
}
