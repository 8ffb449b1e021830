//! Deal-desk API plumbing
//!
//! One [`ApiClient`] per origin, shared by every resource client. Failures
//! are [`ApiError`]s keyed by the [`Operation`] that produced them.

pub mod client;
pub mod errors;
pub mod operations;

pub use client::{encode_segment, ApiClient};
pub use errors::ApiError;
pub use operations::Operation;
