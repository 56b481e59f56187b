//! # Application Layer
//!
//! Process-wide services shared by the command handlers.

pub mod logging;
