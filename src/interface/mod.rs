//! # Interface Layer
//!
//! Command-line surface: argument parsing and the handlers for each subcommand.

pub mod cli;
pub mod commands;
