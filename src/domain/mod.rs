//! # Domain Layer
//!
//! Core definitions for locating the project root and loading configuration.
//! Independent of the MCP framework, serving as the contract for other layers.

pub mod config;
pub mod paths;
pub mod traits;
