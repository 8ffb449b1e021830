//! # DealDesk App
//!
//! Application layer - command-line front end over the deal-desk API.
//!
//! This crate contains:
//! - Commands (CLI → service bridge)
//! - Application context (dependency injection)
//! - Logging setup and the `dealdesk` entry point
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the HTTP clients into the core ports
//! - Prints every command result as JSON

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Command};
pub use commands::execute;
pub use context::*;
