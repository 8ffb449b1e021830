//! Domain types and models
//!
//! Plain records exchanged with the deal-desk API. The server owns
//! consistency; nothing here enforces cross-entity integrity.

pub mod assignment;
pub mod collateral;
pub mod customer;
pub mod dashboard;
pub mod deal;
pub mod document;
pub mod status;
pub mod underwriting;

pub use assignment::{Assignment, CreditRiskAssignRequest};
pub use collateral::{Collateral, CollateralKey, Commitment, FinancialStatus, SpecialCondition};
pub use customer::{ChildCustomer, Customer, CustomerDetails, ProductEntity};
pub use dashboard::{DashboardMetric, DealStatusCount, DealTableRow, MetricValue};
pub use deal::{Deal, DealRecord, NewDraftDeal, RawDeal, ReviewDecision};
pub use document::{Comment, CommentPatch, Document, DocumentPatch, NewComment, NewDocument};
pub use status::{DealStatus, Priority, WorkflowStage};
pub use underwriting::{
    AnalysisDocument, AnalysisDocumentPatch, FinancialAnalysis, FinancialAnalysisPatch,
    NewAnalysisDocument, NewFinancialAnalysis,
};
