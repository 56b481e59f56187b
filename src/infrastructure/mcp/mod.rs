//! # MCP Module
//!
//! Model Context Protocol server exposing the `print_current_directory` tool.

pub mod server;

pub use server::{DirectoryServer, serve_stdio};
