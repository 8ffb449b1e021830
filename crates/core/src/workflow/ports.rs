//! Port interfaces for the deal-workflow service clients
//!
//! These traits define the boundary between callers (screens, the app
//! context, tests) and the HTTP implementations in `dealdesk-infra`.
//! Implementations are stateless between calls: no caching, no request
//! de-duplication.

use async_trait::async_trait;
use dealdesk_domain::{
    Assignment, Collateral, Deal, DealRecord, DealStatus, DealStatusCount, Document,
    DocumentPatch, NewDocument, Priority, Result, WorkflowStage,
};

/// Assignment desk for one workflow stage
#[async_trait]
pub trait StageAssignmentPort: Send + Sync {
    /// Stage this desk serves
    fn stage(&self) -> WorkflowStage;

    /// Deals awaiting this stage, normalized for display
    async fn submitted_deals(&self) -> Result<Vec<Deal>>;

    /// Assign a deal to this stage. `None` priority means `Medium`.
    async fn assign_deal(&self, deal_id: &str, priority: Option<Priority>) -> Result<Assignment>;

    /// Get one assignment by ID
    async fn assignment(&self, assignment_id: &str) -> Result<Assignment>;

    /// All assignments this stage holds for a deal
    async fn assignments_by_deal(&self, deal_id: &str) -> Result<Vec<Assignment>>;
}

/// Credit-deal document storage
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Document>>;

    async fn get(&self, document_id: &str) -> Result<Document>;

    async fn list_by_deal(&self, deal_id: &str) -> Result<Vec<Document>>;

    async fn list_by_assignment(&self, assignment_id: &str) -> Result<Vec<Document>>;

    async fn create(&self, document: &NewDocument) -> Result<Document>;

    async fn update(&self, document_id: &str, patch: &DocumentPatch) -> Result<Document>;

    async fn delete(&self, document_id: &str) -> Result<()>;
}

/// Collateral is write-only from this client's point of view
#[async_trait]
pub trait CollateralRepository: Send + Sync {
    async fn create(&self, collateral: &Collateral) -> Result<Collateral>;
}

/// Deal read side used by the dashboards
#[async_trait]
pub trait DealDashboardPort: Send + Sync {
    async fn status_counts(&self) -> Result<Vec<DealStatusCount>>;

    /// Deals in `status`, normalized for display
    async fn deals_by_status(&self, status: DealStatus) -> Result<Vec<Deal>>;
}

/// Deal lifecycle transitions
#[async_trait]
pub trait DealLifecyclePort: Send + Sync {
    async fn deal(&self, deal_id: &str) -> Result<DealRecord>;

    /// Replace the deal status, keeping every other field as stored
    async fn update_status(&self, deal_id: &str, status: DealStatus) -> Result<DealRecord>;

    /// Record an underwriter approval
    async fn approve(&self, deal_id: &str) -> Result<()>;

    /// Record an underwriter rejection
    async fn reject(&self, deal_id: &str) -> Result<()>;
}
