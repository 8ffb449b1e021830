//! Application context - dependency injection container

use std::sync::Arc;

use dealdesk_core::ui::HeaderState;
use dealdesk_core::{
    CollateralRepository, DealDashboardPort, DealLifecyclePort, DocumentRepository,
    StageAssignmentPort, WorkflowDesk,
};
use dealdesk_domain::{Config, Result, WorkflowStage};
use dealdesk_infra::{
    AnalysisDocumentClient, ApiClient, CommentClient, CustomerClient, DashboardClient,
    DealAttachmentsClient, DealClient, DocumentClient, FinancialAnalysisClient,
    ReferenceDataClient, StageClient, UnderwriterDesk,
};

/// Type alias for document repository port trait object
type DynDocumentRepository = dyn DocumentRepository + Send + Sync + 'static;

/// Type alias for collateral repository port trait object
type DynCollateralRepository = dyn CollateralRepository + Send + Sync + 'static;

/// Type alias for dashboard port trait object
type DynDealDashboardPort = dyn DealDashboardPort + Send + Sync + 'static;

/// Type alias for deal lifecycle port trait object
type DynDealLifecyclePort = dyn DealLifecyclePort + Send + Sync + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,

    // Workflow routing across the three stage desks
    pub workflow: Arc<WorkflowDesk>,
    pub credit_risk: Arc<StageClient>,

    // Ports
    pub documents: Arc<DynDocumentRepository>,
    pub collateral: Arc<DynCollateralRepository>,
    pub dashboard: Arc<DynDealDashboardPort>,
    pub lifecycle: Arc<DynDealLifecyclePort>,

    // Endpoints without a port of their own
    pub comments: Arc<CommentClient>,
    pub attachments: Arc<DealAttachmentsClient>,
    pub metrics: Arc<DashboardClient>,
    pub deals: Arc<DealClient>,
    pub reference: Arc<ReferenceDataClient>,
    pub customers: Arc<CustomerClient>,

    // Underwriter desk
    pub underwriter: Arc<UnderwriterDesk>,
    pub analysis_documents: Arc<AnalysisDocumentClient>,
    pub financial_analysis: Arc<FinancialAnalysisClient>,
}

impl AppContext {
    /// Create a new application context from the environment or a config
    /// file.
    pub fn new() -> Result<Self> {
        let config = dealdesk_infra::config::load()?;
        Self::new_with_config(config)
    }

    /// Create a new application context with custom configuration
    ///
    /// Tests use this to point every client at a mock server.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let api = ApiClient::from_config(&config.api)?;
        let identity = config.identity.clone();

        let credit_risk =
            Arc::new(StageClient::new(api.clone(), WorkflowStage::CreditRisk, identity.clone()));
        let desks: Vec<Arc<dyn StageAssignmentPort>> = vec![
            credit_risk.clone(),
            Arc::new(StageClient::new(api.clone(), WorkflowStage::Documentation, identity.clone())),
            Arc::new(StageClient::new(api.clone(), WorkflowStage::Legal, identity)),
        ];
        let workflow = Arc::new(WorkflowDesk::new(desks));

        let attachments = Arc::new(DealAttachmentsClient::new(api.clone()));
        let metrics = Arc::new(DashboardClient::new(api.clone()));
        let deals = Arc::new(DealClient::new(api.clone()));

        tracing::info!(
            base_url = %config.api.base_url,
            stages = ?workflow.stages(),
            "application context initialized"
        );

        Ok(Self {
            workflow,
            credit_risk,
            documents: Arc::new(DocumentClient::new(api.clone())),
            collateral: attachments.clone(),
            dashboard: metrics.clone(),
            lifecycle: deals.clone(),
            comments: Arc::new(CommentClient::new(api.clone())),
            attachments,
            metrics,
            deals,
            reference: Arc::new(ReferenceDataClient::new(api.clone())),
            customers: Arc::new(CustomerClient::new(api.clone())),
            underwriter: Arc::new(UnderwriterDesk::new(api.clone())),
            analysis_documents: Arc::new(AnalysisDocumentClient::new(api.clone())),
            financial_analysis: Arc::new(FinancialAnalysisClient::new(api)),
            config,
        })
    }

    /// Header state for the configured user, starting in the individual view.
    pub fn header_state(&self) -> HeaderState {
        HeaderState::from(&self.config.identity)
    }
}
