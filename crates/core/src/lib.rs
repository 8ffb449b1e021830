//! # DealDesk Core
//!
//! Pure logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for every deal-desk service client
//! - View-state models behind the presentation components
//!
//! ## Architecture Principles
//! - Only depends on `dealdesk-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod ui;
pub mod workflow;

pub use workflow::ports::{
    CollateralRepository, DealDashboardPort, DealLifecyclePort, DocumentRepository,
    StageAssignmentPort,
};
pub use workflow::WorkflowDesk;
