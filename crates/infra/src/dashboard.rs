//! Dashboard read models
//!
//! Every call goes to the server. There is no cached or canned fallback: a
//! failed call is reported like any other failed operation.

use async_trait::async_trait;
use dealdesk_core::DealDashboardPort;
use dealdesk_domain::{
    normalize_deals, DashboardMetric, Deal, DealStatus, DealStatusCount, DealTableRow, RawDeal,
    Result as DomainResult,
};

use crate::api::{encode_segment, ApiClient, ApiError, Operation};
use crate::stages::deals_by_status_path;

const DASHBOARD_ROOT: &str = "/api/dashboard/deal";

#[derive(Debug, Clone)]
pub struct DashboardClient {
    api: ApiClient,
}

impl DashboardClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn status_counts(&self) -> Result<Vec<DealStatusCount>, ApiError> {
        let path = format!("{DASHBOARD_ROOT}/status-counts");
        self.api.get(Operation::FetchStatusCounts, &path).await
    }

    pub async fn metrics(&self) -> Result<Vec<DashboardMetric>, ApiError> {
        let path = format!("{DASHBOARD_ROOT}/metrics");
        self.api.get(Operation::FetchDashboardMetrics, &path).await
    }

    pub async fn all_deals(&self) -> Result<Vec<DealTableRow>, ApiError> {
        let path = format!("{DASHBOARD_ROOT}/all");
        self.api.get(Operation::FetchAllDeals, &path).await
    }

    /// Deals raised by one initiator ("my deals")
    pub async fn deals_by_initiator(&self, initiator: &str) -> Result<Vec<DealTableRow>, ApiError> {
        let path = format!("{DASHBOARD_ROOT}/by-initiator/{}", encode_segment(initiator));
        self.api.get(Operation::FetchDealsByInitiator, &path).await
    }

    /// Table rows for one status, as the server sends them
    pub async fn deals_by_status(&self, status: DealStatus) -> Result<Vec<DealTableRow>, ApiError> {
        self.api.get(Operation::FetchDealsByStatus, &deals_by_status_path(status)).await
    }

    /// The same listing, normalized for display
    pub async fn normalized_deals_by_status(
        &self,
        status: DealStatus,
    ) -> Result<Vec<Deal>, ApiError> {
        let raw: Vec<RawDeal> =
            self.api.get(Operation::FetchDealsByStatus, &deals_by_status_path(status)).await?;
        Ok(normalize_deals(raw))
    }
}

#[async_trait]
impl DealDashboardPort for DashboardClient {
    async fn status_counts(&self) -> DomainResult<Vec<DealStatusCount>> {
        Ok(DashboardClient::status_counts(self).await?)
    }

    async fn deals_by_status(&self, status: DealStatus) -> DomainResult<Vec<Deal>> {
        Ok(self.normalized_deals_by_status(status).await?)
    }
}
