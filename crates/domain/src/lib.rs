//! # DealDesk Domain
//!
//! Business domain types and models for the deal-desk workflow client.
//!
//! This crate contains:
//! - Deal, assignment, document, comment and collateral records
//! - Wire-level status and priority enums
//! - The shared deal listing normalization
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other DealDesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod normalize;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use normalize::{normalize_deal, normalize_deals};
pub use types::*;
