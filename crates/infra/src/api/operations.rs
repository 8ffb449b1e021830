//! Catalogue of remote operations
//!
//! Each operation owns the fixed message its failure reports to callers and
//! the context line logged alongside the raw cause.

/// A single remote call the deal-desk clients can make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Stage assignment desks
    FetchSubmittedDeals,
    AssignCreditRisk,
    AssignDocumentation,
    AssignLegal,
    FetchAssignment,
    FetchAssignmentsByDeal,
    FetchOfficerAssignments,

    // Credit-deal documents
    FetchDocuments,
    FetchDocument,
    FetchDocumentsByDeal,
    FetchDocumentsByAssignment,
    CreateDocument,
    UpdateDocument,
    DeleteDocument,

    // Credit-deal comments
    FetchComments,
    FetchComment,
    FetchCommentsByDeal,
    FetchCommentsByAssignment,
    CreateComment,
    UpdateComment,
    DeleteComment,

    // Underwriter desk
    FetchUnderwriterQueue,
    FetchAnalysisDocuments,
    FetchAnalysisDocument,
    FetchAnalysisDocumentsByDeal,
    FetchAnalysisDocumentsByAssignment,
    FetchAnalysisDocumentsByType,
    CreateAnalysisDocument,
    UpdateAnalysisDocument,
    DeleteAnalysisDocument,
    FetchFinancialAnalyses,
    FetchFinancialAnalysis,
    FetchFinancialAnalysisByDeal,
    FetchFinancialAnalysesByAssignment,
    CreateFinancialAnalysis,
    UpdateFinancialAnalysis,
    DeleteFinancialAnalysis,
    CheckFinancialAnalysisExists,

    // Deal attachments and reference data
    CreateCollateral,
    CreateCommitment,
    CreateFinancialStatus,
    FetchFinancialStatuses,
    CreateSpecialCondition,
    FetchSpecialConditions,
    FetchDropdownValues,
    FetchProductCatalog,

    // Customer directory
    FetchCustomers,
    FetchCustomerDetails,

    // Dashboard
    FetchStatusCounts,
    FetchDashboardMetrics,
    FetchAllDeals,
    FetchDealsByInitiator,
    FetchDealsByStatus,

    // Deal lifecycle
    CreateDraftDeal,
    FetchDeal,
    UpdateDealStatus,
    ApproveDeal,
    RejectDeal,
}

impl Operation {
    /// Stable identifier used as a structured log field
    pub const fn name(self) -> &'static str {
        match self {
            Self::FetchSubmittedDeals => "fetch_submitted_deals",
            Self::AssignCreditRisk => "assign_credit_risk",
            Self::AssignDocumentation => "assign_documentation",
            Self::AssignLegal => "assign_legal",
            Self::FetchAssignment => "fetch_assignment",
            Self::FetchAssignmentsByDeal => "fetch_assignments_by_deal",
            Self::FetchOfficerAssignments => "fetch_officer_assignments",
            Self::FetchDocuments => "fetch_documents",
            Self::FetchDocument => "fetch_document",
            Self::FetchDocumentsByDeal => "fetch_documents_by_deal",
            Self::FetchDocumentsByAssignment => "fetch_documents_by_assignment",
            Self::CreateDocument => "create_document",
            Self::UpdateDocument => "update_document",
            Self::DeleteDocument => "delete_document",
            Self::FetchComments => "fetch_comments",
            Self::FetchComment => "fetch_comment",
            Self::FetchCommentsByDeal => "fetch_comments_by_deal",
            Self::FetchCommentsByAssignment => "fetch_comments_by_assignment",
            Self::CreateComment => "create_comment",
            Self::UpdateComment => "update_comment",
            Self::DeleteComment => "delete_comment",
            Self::FetchUnderwriterQueue => "fetch_underwriter_queue",
            Self::FetchAnalysisDocuments => "fetch_analysis_documents",
            Self::FetchAnalysisDocument => "fetch_analysis_document",
            Self::FetchAnalysisDocumentsByDeal => "fetch_analysis_documents_by_deal",
            Self::FetchAnalysisDocumentsByAssignment => "fetch_analysis_documents_by_assignment",
            Self::FetchAnalysisDocumentsByType => "fetch_analysis_documents_by_type",
            Self::CreateAnalysisDocument => "create_analysis_document",
            Self::UpdateAnalysisDocument => "update_analysis_document",
            Self::DeleteAnalysisDocument => "delete_analysis_document",
            Self::FetchFinancialAnalyses => "fetch_financial_analyses",
            Self::FetchFinancialAnalysis => "fetch_financial_analysis",
            Self::FetchFinancialAnalysisByDeal => "fetch_financial_analysis_by_deal",
            Self::FetchFinancialAnalysesByAssignment => "fetch_financial_analyses_by_assignment",
            Self::CreateFinancialAnalysis => "create_financial_analysis",
            Self::UpdateFinancialAnalysis => "update_financial_analysis",
            Self::DeleteFinancialAnalysis => "delete_financial_analysis",
            Self::CheckFinancialAnalysisExists => "check_financial_analysis_exists",
            Self::CreateCollateral => "create_collateral",
            Self::CreateCommitment => "create_commitment",
            Self::CreateFinancialStatus => "create_financial_status",
            Self::FetchFinancialStatuses => "fetch_financial_statuses",
            Self::CreateSpecialCondition => "create_special_condition",
            Self::FetchSpecialConditions => "fetch_special_conditions",
            Self::FetchDropdownValues => "fetch_dropdown_values",
            Self::FetchProductCatalog => "fetch_product_catalog",
            Self::FetchCustomers => "fetch_customers",
            Self::FetchCustomerDetails => "fetch_customer_details",
            Self::FetchStatusCounts => "fetch_status_counts",
            Self::FetchDashboardMetrics => "fetch_dashboard_metrics",
            Self::FetchAllDeals => "fetch_all_deals",
            Self::FetchDealsByInitiator => "fetch_deals_by_initiator",
            Self::FetchDealsByStatus => "fetch_deals_by_status",
            Self::CreateDraftDeal => "create_draft_deal",
            Self::FetchDeal => "fetch_deal",
            Self::UpdateDealStatus => "update_deal_status",
            Self::ApproveDeal => "approve_deal",
            Self::RejectDeal => "reject_deal",
        }
    }

    /// Message a caller sees when this operation fails
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::FetchSubmittedDeals => "Failed to fetch submitted deals",
            Self::AssignCreditRisk => "Failed to assign deal",
            Self::AssignDocumentation => "Failed to assign deal to documentation",
            Self::AssignLegal => "Failed to assign deal to legal",
            Self::FetchAssignment => "Failed to fetch assignment details",
            Self::FetchAssignmentsByDeal | Self::FetchOfficerAssignments => {
                "Failed to fetch assignments"
            }
            Self::FetchDocuments => "Failed to fetch documents",
            Self::FetchDocument => "Failed to fetch document",
            Self::FetchDocumentsByDeal => "Failed to fetch documents by deal ID",
            Self::FetchDocumentsByAssignment => "Failed to fetch documents by assignment ID",
            Self::CreateDocument => "Failed to create document",
            Self::UpdateDocument => "Failed to update document",
            Self::DeleteDocument => "Failed to delete document",
            Self::FetchComments => "Failed to fetch comments",
            Self::FetchComment => "Failed to fetch comment",
            Self::FetchCommentsByDeal => "Failed to fetch comments by deal ID",
            Self::FetchCommentsByAssignment => "Failed to fetch comments by assignment ID",
            Self::CreateComment => "Failed to create comment",
            Self::UpdateComment => "Failed to update comment",
            Self::DeleteComment => "Failed to delete comment",
            Self::FetchUnderwriterQueue => "Failed to fetch submitted deals",
            Self::FetchAnalysisDocuments
            | Self::FetchAnalysisDocumentsByDeal
            | Self::FetchAnalysisDocumentsByAssignment
            | Self::FetchAnalysisDocumentsByType => "Failed to fetch documents",
            Self::FetchAnalysisDocument => "Failed to fetch document",
            Self::CreateAnalysisDocument => "Failed to create document",
            Self::UpdateAnalysisDocument => "Failed to update document",
            Self::DeleteAnalysisDocument => "Failed to delete document",
            Self::FetchFinancialAnalyses
            | Self::FetchFinancialAnalysis
            | Self::FetchFinancialAnalysisByDeal
            | Self::FetchFinancialAnalysesByAssignment => "Failed to fetch financial analysis",
            Self::CreateFinancialAnalysis => "Failed to create financial analysis",
            Self::UpdateFinancialAnalysis => "Failed to update financial analysis",
            Self::DeleteFinancialAnalysis => "Failed to delete financial analysis",
            Self::CheckFinancialAnalysisExists => "Failed to check if financial analysis exists",
            Self::CreateCollateral => "Failed to save collateral",
            Self::CreateCommitment => "Failed to save commitment",
            Self::CreateFinancialStatus => "Failed to save financial status",
            Self::FetchFinancialStatuses => "Failed to fetch financial statuses",
            Self::CreateSpecialCondition => "Failed to save special condition",
            Self::FetchSpecialConditions => "Failed to fetch special conditions",
            Self::FetchDropdownValues => "Failed to fetch dropdown values",
            Self::FetchProductCatalog => "Failed to fetch product catalog",
            Self::FetchCustomers => "Failed to fetch customers",
            Self::FetchCustomerDetails => "Failed to fetch customer details",
            Self::FetchStatusCounts => "Failed to fetch deal status counts",
            Self::FetchDashboardMetrics => "Failed to fetch dashboard metrics",
            Self::FetchAllDeals => "Failed to fetch deals",
            Self::FetchDealsByInitiator => "Failed to fetch deals by initiator",
            Self::FetchDealsByStatus => "Failed to fetch deals by status",
            Self::CreateDraftDeal => "Failed to save draft deal",
            Self::FetchDeal => "Failed to fetch deal",
            Self::UpdateDealStatus => "Failed to update deal status",
            Self::ApproveDeal => "Failed to approve deal",
            Self::RejectDeal => "Failed to reject deal",
        }
    }

    /// Context logged next to the raw cause
    pub const fn log_context(self) -> &'static str {
        match self {
            Self::FetchSubmittedDeals => "Error fetching submitted deals",
            Self::AssignCreditRisk => "Error assigning deal",
            Self::AssignDocumentation => "Error assigning deal to documentation",
            Self::AssignLegal => "Error assigning deal to legal",
            Self::FetchAssignment => "Error fetching assignment details",
            Self::FetchAssignmentsByDeal | Self::FetchOfficerAssignments => {
                "Error fetching assignments"
            }
            Self::FetchDocuments => "Error fetching documents",
            Self::FetchDocument => "Error fetching document",
            Self::FetchDocumentsByDeal => "Error fetching documents by deal ID",
            Self::FetchDocumentsByAssignment => "Error fetching documents by assignment ID",
            Self::CreateDocument => "Error creating document",
            Self::UpdateDocument => "Error updating document",
            Self::DeleteDocument => "Error deleting document",
            Self::FetchComments => "Error fetching comments",
            Self::FetchComment => "Error fetching comment",
            Self::FetchCommentsByDeal => "Error fetching comments by deal ID",
            Self::FetchCommentsByAssignment => "Error fetching comments by assignment ID",
            Self::CreateComment => "Error creating comment",
            Self::UpdateComment => "Error updating comment",
            Self::DeleteComment => "Error deleting comment",
            Self::FetchUnderwriterQueue => "Error fetching submitted deals",
            Self::FetchAnalysisDocuments
            | Self::FetchAnalysisDocumentsByDeal
            | Self::FetchAnalysisDocumentsByAssignment
            | Self::FetchAnalysisDocumentsByType => "Error loading documents",
            Self::FetchAnalysisDocument => "Error loading document",
            Self::CreateAnalysisDocument | Self::UpdateAnalysisDocument => "Error saving document",
            Self::DeleteAnalysisDocument => "Error deleting document",
            Self::FetchFinancialAnalyses
            | Self::FetchFinancialAnalysis
            | Self::FetchFinancialAnalysisByDeal
            | Self::FetchFinancialAnalysesByAssignment
            | Self::CheckFinancialAnalysisExists => "Error loading financial analysis",
            Self::CreateFinancialAnalysis | Self::UpdateFinancialAnalysis => {
                "Error saving financial analysis"
            }
            Self::DeleteFinancialAnalysis => "Error deleting financial analysis",
            Self::CreateCollateral => "Error saving collateral",
            Self::CreateCommitment => "Error saving commitment",
            Self::CreateFinancialStatus => "Error saving financial status",
            Self::FetchFinancialStatuses => "Error fetching financial statuses",
            Self::CreateSpecialCondition => "Error saving special condition",
            Self::FetchSpecialConditions => "Error fetching special conditions",
            Self::FetchDropdownValues => "Error fetching dropdown values",
            Self::FetchProductCatalog => "Error fetching product catalog",
            Self::FetchCustomers => "Error fetching customers",
            Self::FetchCustomerDetails => "Error fetching customer details",
            Self::FetchStatusCounts => "Error fetching deal status counts",
            Self::FetchDashboardMetrics => "Error fetching dashboard metrics",
            Self::FetchAllDeals => "Error fetching deals",
            Self::FetchDealsByInitiator => "Error fetching deals by initiator",
            Self::FetchDealsByStatus => "Error fetching deals by status",
            Self::CreateDraftDeal => "Error saving draft deal",
            Self::FetchDeal => "Error fetching deal",
            Self::UpdateDealStatus => "Error updating deal status",
            Self::ApproveDeal => "Error approving deal",
            Self::RejectDeal => "Error rejecting deal",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
