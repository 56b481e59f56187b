//! # Infrastructure Layer
//!
//! Handles interactions with the platform and the MCP framework.
//! Implements the traits defined in the Domain layer (e.g., UnitLocator).

pub mod locator;
pub mod mcp;
