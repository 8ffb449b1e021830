//! Records attached to a deal: collateral, commitments, financial statuses
//! and special conditions.

use async_trait::async_trait;
use dealdesk_core::CollateralRepository;
use dealdesk_domain::{
    Collateral, Commitment, FinancialStatus, Result as DomainResult, SpecialCondition,
};
use tracing::instrument;

use crate::api::{encode_segment, ApiClient, ApiError, Operation};

const COLLATERALS: &str = "/api/deal-collaterals";
const COMMITMENTS: &str = "/api/deal-commitments";
const FINANCIAL_STATUSES: &str = "/api/deal-financial-statuses";
const SPECIAL_CONDITIONS: &str = "/api/deal-special-conditions";

#[derive(Debug, Clone)]
pub struct DealAttachmentsClient {
    api: ApiClient,
}

impl DealAttachmentsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Collateral is create-only; the full entity is sent.
    #[instrument(skip(self, collateral), fields(deal_id = %collateral.deal_id))]
    pub async fn create_collateral(&self, collateral: &Collateral) -> Result<Collateral, ApiError> {
        self.api.post(Operation::CreateCollateral, COLLATERALS, collateral).await
    }

    #[instrument(skip(self, commitment), fields(deal_id = %commitment.deal_id))]
    pub async fn create_commitment(&self, commitment: &Commitment) -> Result<Commitment, ApiError> {
        self.api.post(Operation::CreateCommitment, COMMITMENTS, commitment).await
    }

    #[instrument(skip(self, status), fields(deal_id = %status.deal_id))]
    pub async fn create_financial_status(
        &self,
        status: &FinancialStatus,
    ) -> Result<FinancialStatus, ApiError> {
        self.api.post(Operation::CreateFinancialStatus, FINANCIAL_STATUSES, status).await
    }

    pub async fn financial_statuses(
        &self,
        deal_id: &str,
    ) -> Result<Vec<FinancialStatus>, ApiError> {
        let path = format!("{FINANCIAL_STATUSES}/deal/{}", encode_segment(deal_id));
        self.api.get(Operation::FetchFinancialStatuses, &path).await
    }

    #[instrument(skip(self, condition), fields(deal_id = %condition.deal_id))]
    pub async fn add_special_condition(
        &self,
        condition: &SpecialCondition,
    ) -> Result<SpecialCondition, ApiError> {
        self.api.post(Operation::CreateSpecialCondition, SPECIAL_CONDITIONS, condition).await
    }

    pub async fn special_conditions(
        &self,
        deal_id: &str,
    ) -> Result<Vec<SpecialCondition>, ApiError> {
        let path = format!("{SPECIAL_CONDITIONS}/deal/{}", encode_segment(deal_id));
        self.api.get(Operation::FetchSpecialConditions, &path).await
    }
}

#[async_trait]
impl CollateralRepository for DealAttachmentsClient {
    async fn create(&self, collateral: &Collateral) -> DomainResult<Collateral> {
        Ok(self.create_collateral(collateral).await?)
    }
}
