//! Underwriter desk: the review queue and the underwriter's own records
//!
//! Approving and rejecting a deal go through [`crate::DealClient`]; this
//! module covers what the underwriter reads and files while reviewing.

use dealdesk_domain::{
    normalize_deals, AnalysisDocument, AnalysisDocumentPatch, Deal, DealStatus, FinancialAnalysis,
    FinancialAnalysisPatch, NewAnalysisDocument, NewFinancialAnalysis, RawDeal,
};
use tracing::instrument;

use crate::api::{encode_segment, ApiClient, ApiError, Operation};
use crate::resources::{CrudClient, CrudOperations, CrudResource, DealListing};
use crate::stages::deals_by_status_path;

/// Status of deals waiting for an underwriter decision
pub const UNDERWRITER_QUEUE_STATUS: DealStatus = DealStatus::Submitted;

/// Review queue of the underwriter desk
#[derive(Debug, Clone)]
pub struct UnderwriterDesk {
    api: ApiClient,
}

impl UnderwriterDesk {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submitted deals, normalized for display
    #[instrument(skip(self))]
    pub async fn submitted_deals(&self) -> Result<Vec<Deal>, ApiError> {
        let path = deals_by_status_path(UNDERWRITER_QUEUE_STATUS);
        let raw: Vec<RawDeal> = self.api.get(Operation::FetchUnderwriterQueue, &path).await?;
        Ok(normalize_deals(raw))
    }
}

/// `/api/underwriter-analysis-documents`
#[derive(Debug, Clone, Copy)]
pub struct UnderwriterAnalysisDocuments;

impl CrudResource for UnderwriterAnalysisDocuments {
    type Record = AnalysisDocument;
    type Draft = NewAnalysisDocument;
    type Patch = AnalysisDocumentPatch;

    const ROOT: &'static str = "/api/underwriter-analysis-documents";
    const OPERATIONS: CrudOperations = CrudOperations {
        list: Operation::FetchAnalysisDocuments,
        get: Operation::FetchAnalysisDocument,
        list_by_assignment: Operation::FetchAnalysisDocumentsByAssignment,
        create: Operation::CreateAnalysisDocument,
        update: Operation::UpdateAnalysisDocument,
        delete: Operation::DeleteAnalysisDocument,
    };
}

impl DealListing for UnderwriterAnalysisDocuments {
    const LIST_BY_DEAL: Operation = Operation::FetchAnalysisDocumentsByDeal;
}

/// `/api/underwriter-financial-analysis`
///
/// A deal carries at most one analysis, so `deal/{id}` returns a single
/// record rather than a list.
#[derive(Debug, Clone, Copy)]
pub struct UnderwriterFinancialAnalyses;

impl CrudResource for UnderwriterFinancialAnalyses {
    type Record = FinancialAnalysis;
    type Draft = NewFinancialAnalysis;
    type Patch = FinancialAnalysisPatch;

    const ROOT: &'static str = "/api/underwriter-financial-analysis";
    const OPERATIONS: CrudOperations = CrudOperations {
        list: Operation::FetchFinancialAnalyses,
        get: Operation::FetchFinancialAnalysis,
        list_by_assignment: Operation::FetchFinancialAnalysesByAssignment,
        create: Operation::CreateFinancialAnalysis,
        update: Operation::UpdateFinancialAnalysis,
        delete: Operation::DeleteFinancialAnalysis,
    };
}

pub type AnalysisDocumentClient = CrudClient<UnderwriterAnalysisDocuments>;
pub type FinancialAnalysisClient = CrudClient<UnderwriterFinancialAnalyses>;

impl CrudClient<UnderwriterAnalysisDocuments> {
    /// Documents of one type filed against a deal
    pub async fn list_by_deal_and_type(
        &self,
        deal_id: &str,
        document_type: &str,
    ) -> Result<Vec<AnalysisDocument>, ApiError> {
        let path = format!(
            "{}/deal/{}/type/{}",
            UnderwriterAnalysisDocuments::ROOT,
            encode_segment(deal_id),
            encode_segment(document_type)
        );
        self.api.get(Operation::FetchAnalysisDocumentsByType, &path).await
    }
}

fn analysis_deal_path(deal_id: &str) -> String {
    format!("{}/deal/{}", UnderwriterFinancialAnalyses::ROOT, encode_segment(deal_id))
}

impl CrudClient<UnderwriterFinancialAnalyses> {
    /// The deal's analysis, or `None` when none has been filed (404)
    pub async fn by_deal(&self, deal_id: &str) -> Result<Option<FinancialAnalysis>, ApiError> {
        let path = analysis_deal_path(deal_id);
        self.api.get_optional(Operation::FetchFinancialAnalysisByDeal, &path).await
    }

    pub async fn exists_for_deal(&self, deal_id: &str) -> Result<bool, ApiError> {
        let path = format!("{}/exists", analysis_deal_path(deal_id));
        self.api.get(Operation::CheckFinancialAnalysisExists, &path).await
    }
}
