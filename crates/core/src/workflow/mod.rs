//! Deal-workflow boundaries

pub mod ports;
pub mod service;

pub use ports::{
    CollateralRepository, DealDashboardPort, DealLifecyclePort, DocumentRepository,
    StageAssignmentPort,
};
pub use service::WorkflowDesk;
