//! # DealDesk Infrastructure
//!
//! HTTP implementations of the `dealdesk-core` ports.
//!
//! This crate contains:
//! - The shared reqwest transport and the operation-aware API client
//! - Stage assignment, document/comment, attachment, dashboard and deal
//!   lifecycle clients
//! - The underwriter desk and its analysis records
//! - Customer directory and reference-data lookups
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `dealdesk-core`
//! - Depends on `dealdesk-domain` and `dealdesk-core`
//! - Contains all "impure" code (network and file I/O)

pub mod api;
pub mod attachments;
pub mod config;
pub mod customers;
pub mod dashboard;
pub mod deals;
pub mod http;
pub mod reference;
pub mod resources;
pub mod stages;
pub mod underwriting;

// Re-export commonly used items
pub use api::{ApiClient, ApiError, Operation};
pub use attachments::DealAttachmentsClient;
pub use customers::CustomerClient;
pub use dashboard::DashboardClient;
pub use deals::DealClient;
pub use http::{HttpClient, HttpClientBuilder};
pub use reference::{CatalogLevel, ReferenceDataClient};
pub use resources::{
    CommentClient, CreditComments, CreditDocuments, CrudClient, CrudOperations, CrudResource,
    DealListing, DocumentClient,
};
pub use stages::{assignment_root, StageClient};
pub use underwriting::{
    AnalysisDocumentClient, FinancialAnalysisClient, UnderwriterAnalysisDocuments, UnderwriterDesk,
    UnderwriterFinancialAnalyses,
};
