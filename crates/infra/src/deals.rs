//! Deal lifecycle: drafts, status transitions and underwriter decisions

use async_trait::async_trait;
use dealdesk_core::DealLifecyclePort;
use dealdesk_domain::constants::UNDERWRITER_ACTOR;
use dealdesk_domain::{
    DealRecord, DealStatus, NewDraftDeal, Result as DomainResult, ReviewDecision,
};
use tracing::{debug, instrument};

use crate::api::{encode_segment, ApiClient, ApiError, Operation};

#[derive(Debug, Clone)]
pub struct DealClient {
    api: ApiClient,
}

fn deal_path(deal_id: &str) -> String {
    format!("/api/deal/{}", encode_segment(deal_id))
}

impl DealClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create_draft(&self, draft: &NewDraftDeal) -> Result<DealRecord, ApiError> {
        self.api.post(Operation::CreateDraftDeal, "/api/deals/draft", draft).await
    }

    pub async fn deal(&self, deal_id: &str) -> Result<DealRecord, ApiError> {
        self.api.get(Operation::FetchDeal, &deal_path(deal_id)).await
    }

    /// Read the stored deal, replace its status and write it back whole.
    ///
    /// Fields this client does not model are carried through untouched.
    /// Two concurrent updates race; the last write wins.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        deal_id: &str,
        status: DealStatus,
    ) -> Result<DealRecord, ApiError> {
        let mut record = self.deal(deal_id).await?;
        debug!(previous = ?record.deal_status, next = %status, "replacing deal status");
        record.deal_status = Some(status.to_string());

        self.api.put_discarding(Operation::UpdateDealStatus, &deal_path(deal_id), &record).await?;
        Ok(record)
    }

    pub async fn submit(&self, deal_id: &str) -> Result<DealRecord, ApiError> {
        self.update_status(deal_id, DealStatus::Submitted).await
    }

    pub async fn approve(&self, deal_id: &str) -> Result<(), ApiError> {
        self.decide(Operation::ApproveDeal, deal_id, DealStatus::Approved).await
    }

    pub async fn reject(&self, deal_id: &str) -> Result<(), ApiError> {
        self.decide(Operation::RejectDeal, deal_id, DealStatus::Rejected).await
    }

    async fn decide(
        &self,
        operation: Operation,
        deal_id: &str,
        status: DealStatus,
    ) -> Result<(), ApiError> {
        let decision =
            ReviewDecision { deal_status: status, last_updated_by: UNDERWRITER_ACTOR.to_string() };
        self.api.put_discarding(operation, &deal_path(deal_id), &decision).await
    }
}

#[async_trait]
impl DealLifecyclePort for DealClient {
    async fn deal(&self, deal_id: &str) -> DomainResult<DealRecord> {
        Ok(DealClient::deal(self, deal_id).await?)
    }

    async fn update_status(&self, deal_id: &str, status: DealStatus) -> DomainResult<DealRecord> {
        Ok(DealClient::update_status(self, deal_id, status).await?)
    }

    async fn approve(&self, deal_id: &str) -> DomainResult<()> {
        Ok(DealClient::approve(self, deal_id).await?)
    }

    async fn reject(&self, deal_id: &str) -> DomainResult<()> {
        Ok(DealClient::reject(self, deal_id).await?)
    }
}
