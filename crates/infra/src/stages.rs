//! Per-stage assignment desks
//!
//! Credit risk, documentation and legal share one client. The stage picks
//! the endpoint family and the assignment wire shape; the deal listing and
//! its normalization are common to all three.

use async_trait::async_trait;
use dealdesk_core::StageAssignmentPort;
use dealdesk_domain::{
    normalize_deals, Assignment, CreditRiskAssignRequest, Deal, DealStatus, IdentityConfig,
    Priority, RawDeal, Result as DomainResult, WorkflowStage,
};
use tracing::{error, instrument};

use crate::api::{encode_segment, ApiClient, ApiError, Operation};

/// Status of deals waiting to be picked up by a stage
pub const AWAITING_STAGE_STATUS: DealStatus = DealStatus::InProgress;

/// Root of a stage's assignment endpoints
pub const fn assignment_root(stage: WorkflowStage) -> &'static str {
    match stage {
        WorkflowStage::CreditRisk => "/api/credit-risk-assignments",
        WorkflowStage::Documentation => "/api/documentation-deal-assignments",
        WorkflowStage::Legal => "/api/legal-deal-assignments",
    }
}

const fn assign_operation(stage: WorkflowStage) -> Operation {
    match stage {
        WorkflowStage::CreditRisk => Operation::AssignCreditRisk,
        WorkflowStage::Documentation => Operation::AssignDocumentation,
        WorkflowStage::Legal => Operation::AssignLegal,
    }
}

/// Path of the shared by-status deal listing
pub fn deals_by_status_path(status: DealStatus) -> String {
    format!("/api/dashboard/deal/by-status/{}", encode_segment(status.as_str()))
}

/// Assignment desk for one workflow stage
#[derive(Debug, Clone)]
pub struct StageClient {
    api: ApiClient,
    stage: WorkflowStage,
    identity: IdentityConfig,
}

impl StageClient {
    pub fn new(api: ApiClient, stage: WorkflowStage, identity: IdentityConfig) -> Self {
        Self { api, stage, identity }
    }

    pub const fn stage(&self) -> WorkflowStage {
        self.stage
    }

    /// Deals awaiting this stage, normalized for display
    #[instrument(skip(self), fields(stage = %self.stage))]
    pub async fn submitted_deals(&self) -> Result<Vec<Deal>, ApiError> {
        let raw: Vec<RawDeal> = self
            .api
            .get(Operation::FetchSubmittedDeals, &deals_by_status_path(AWAITING_STAGE_STATUS))
            .await?;
        Ok(normalize_deals(raw))
    }

    /// Assign a deal to this stage. A missing priority is sent as `Medium`.
    #[instrument(skip(self), fields(stage = %self.stage))]
    pub async fn assign_deal(
        &self,
        deal_id: &str,
        priority: Option<Priority>,
    ) -> Result<Assignment, ApiError> {
        let priority = priority.unwrap_or_default();
        let root = assignment_root(self.stage);
        let operation = assign_operation(self.stage);

        match self.stage {
            WorkflowStage::CreditRisk => {
                let request = CreditRiskAssignRequest {
                    deal_id: deal_id.to_string(),
                    credit_officer_id: self.identity.officer_id.clone(),
                    assigned_by: self.identity.assigned_by.clone(),
                    priority,
                };
                self.api.post(operation, &format!("{root}/assign"), &request).await
            }
            WorkflowStage::Documentation | WorkflowStage::Legal => {
                let path = format!(
                    "{root}/assign/{}?priority={}",
                    encode_segment(deal_id),
                    encode_segment(priority.as_str())
                );
                self.api.post_empty(operation, &path).await
            }
        }
    }

    pub async fn assignment(&self, assignment_id: &str) -> Result<Assignment, ApiError> {
        let path = format!("{}/{}", assignment_root(self.stage), encode_segment(assignment_id));
        self.api.get(Operation::FetchAssignment, &path).await
    }

    pub async fn assignments_by_deal(&self, deal_id: &str) -> Result<Vec<Assignment>, ApiError> {
        let path = format!("{}/deal/{}", assignment_root(self.stage), encode_segment(deal_id));
        self.api.get(Operation::FetchAssignmentsByDeal, &path).await
    }

    /// Assignments routed to one credit officer. Only the credit-risk desk
    /// has this endpoint; other stages fail without sending a request.
    pub async fn assignments_by_officer(
        &self,
        officer_id: &str,
    ) -> Result<Vec<Assignment>, ApiError> {
        let operation = Operation::FetchOfficerAssignments;
        if self.stage != WorkflowStage::CreditRisk {
            let err = ApiError::Unsupported { operation, stage: self.stage };
            error!(operation = operation.name(), stage = %self.stage, "{err}");
            return Err(err);
        }

        let path = format!(
            "{}/credit-officer/{}",
            assignment_root(self.stage),
            encode_segment(officer_id)
        );
        self.api.get(operation, &path).await
    }

    /// Assignments for the configured credit officer
    pub async fn my_assignments(&self) -> Result<Vec<Assignment>, ApiError> {
        self.assignments_by_officer(&self.identity.officer_id).await
    }
}

#[async_trait]
impl StageAssignmentPort for StageClient {
    fn stage(&self) -> WorkflowStage {
        self.stage
    }

    async fn submitted_deals(&self) -> DomainResult<Vec<Deal>> {
        Ok(StageClient::submitted_deals(self).await?)
    }

    async fn assign_deal(
        &self,
        deal_id: &str,
        priority: Option<Priority>,
    ) -> DomainResult<Assignment> {
        Ok(StageClient::assign_deal(self, deal_id, priority).await?)
    }

    async fn assignment(&self, assignment_id: &str) -> DomainResult<Assignment> {
        Ok(StageClient::assignment(self, assignment_id).await?)
    }

    async fn assignments_by_deal(&self, deal_id: &str) -> DomainResult<Vec<Assignment>> {
        Ok(StageClient::assignments_by_deal(self, deal_id).await?)
    }
}
