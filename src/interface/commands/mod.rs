//! # Command Handlers
//!
//! Contains the handler function for each subcommand (`serve`, `locate`).

pub mod locate;
pub mod serve;
