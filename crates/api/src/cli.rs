//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dealdesk_domain::{DealStatus, Priority, WorkflowStage};
use dealdesk_infra::CatalogLevel;

#[derive(Parser, Debug)]
#[command(name = "dealdesk", version, about = "Deal desk workflow client")]
pub struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true, env = "DEALDESK_LOG_JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deals awaiting a workflow stage
    Submitted {
        /// credit-risk, documentation or legal
        stage: WorkflowStage,
    },

    /// Assign a deal to a workflow stage
    Assign {
        stage: WorkflowStage,
        deal_id: String,
        /// Low, Medium, High or Critical (defaults to Medium)
        #[arg(long)]
        priority: Option<Priority>,
    },

    /// One assignment by id
    Assignment { stage: WorkflowStage, assignment_id: String },

    /// Assignments for a deal across every stage
    Assignments { deal_id: String },

    /// Credit-risk assignments for the configured officer
    MyAssignments,

    /// Documents of a deal, of an assignment, or all of them
    Documents {
        #[arg(long, conflicts_with = "assignment")]
        deal: Option<String>,
        #[arg(long)]
        assignment: Option<String>,
    },

    /// Comments on a deal
    Comments { deal_id: String },

    /// Comment on a deal under one assignment, as the configured user
    AddComment { assignment_id: String, deal_id: String, text: String },

    /// Pledge collateral read from a JSON file (`-` reads stdin)
    AddCollateral { file: PathBuf },

    /// Add a commitment line read from a JSON file (`-` reads stdin)
    AddCommitment { file: PathBuf },

    /// File a financial status read from a JSON file (`-` reads stdin)
    AddFinancialStatus { file: PathBuf },

    /// Attach a numbered special condition to a deal
    AddSpecialCondition { deal_id: String, condition_number: i64, description: String },

    /// Special conditions of a deal
    SpecialConditions { deal_id: String },

    /// Deal counts per status
    StatusCounts,

    /// Headline dashboard metrics
    Metrics,

    /// Every deal in the dashboard table
    AllDeals,

    /// Normalized deals in one status
    Deals {
        #[arg(long, default_value = "In-Progress")]
        status: DealStatus,
    },

    /// Full deal record
    Deal { deal_id: String },

    /// Open a draft deal
    CreateDraft {
        customer_id: String,
        customer_name: String,
        /// Defaults to the configured user email
        #[arg(long)]
        initiator: Option<String>,
    },

    /// Move a deal to a new status
    SetStatus { deal_id: String, status: DealStatus },

    /// Submit a draft deal
    Submit { deal_id: String },

    /// Record an underwriter approval
    Approve { deal_id: String },

    /// Record an underwriter rejection
    Reject { deal_id: String },

    /// Financial statuses recorded for a deal
    Financials { deal_id: String },

    /// Deals waiting for an underwriter decision
    UnderwriterQueue,

    /// Underwriter analysis documents of a deal
    AnalysisDocuments {
        deal_id: String,
        /// Only documents of this type
        #[arg(long = "type")]
        document_type: Option<String>,
    },

    /// Underwriter financial analysis of a deal (null when none is filed)
    FinancialAnalysis { deal_id: String },

    /// Customer directory
    Customers,

    /// One customer with its related records
    Customer { customer_id: String },

    /// Product catalogue: business domains, or the children of one entry
    Products {
        #[arg(long, value_enum, requires = "parent")]
        level: Option<CatalogArg>,
        /// Id of the parent entry
        #[arg(long, requires = "level")]
        parent: Option<String>,
    },

    /// Allowed values of a form field
    Dropdown { field: String },

    /// Header identity and view
    Header {
        /// Start in the manager view
        #[arg(long)]
        manager: bool,
    },
}

/// Product catalogue level below the business domains
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogArg {
    Categories,
    Subcategories,
    Products,
    SubProducts,
}

impl From<CatalogArg> for CatalogLevel {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Categories => Self::Categories,
            CatalogArg::Subcategories => Self::Subcategories,
            CatalogArg::Products => Self::Products,
            CatalogArg::SubProducts => Self::SubProducts,
        }
    }
}

impl Command {
    /// Stable identifier used in command logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Submitted { .. } => "workflow::submitted",
            Self::Assign { .. } => "workflow::assign",
            Self::Assignment { .. } => "workflow::assignment",
            Self::Assignments { .. } => "workflow::assignments",
            Self::MyAssignments => "workflow::my_assignments",
            Self::Documents { .. } => "documents::list",
            Self::Comments { .. } => "documents::comments",
            Self::AddComment { .. } => "documents::add_comment",
            Self::AddCollateral { .. } => "deals::add_collateral",
            Self::AddCommitment { .. } => "deals::add_commitment",
            Self::AddFinancialStatus { .. } => "deals::add_financial_status",
            Self::AddSpecialCondition { .. } => "deals::add_special_condition",
            Self::SpecialConditions { .. } => "deals::special_conditions",
            Self::StatusCounts => "dashboard::status_counts",
            Self::Metrics => "dashboard::metrics",
            Self::AllDeals => "dashboard::all_deals",
            Self::Deals { .. } => "dashboard::deals",
            Self::Deal { .. } => "deals::get",
            Self::CreateDraft { .. } => "deals::create_draft",
            Self::SetStatus { .. } => "deals::set_status",
            Self::Submit { .. } => "deals::submit",
            Self::Approve { .. } => "deals::approve",
            Self::Reject { .. } => "deals::reject",
            Self::Financials { .. } => "reference::financials",
            Self::UnderwriterQueue => "underwriting::queue",
            Self::AnalysisDocuments { .. } => "underwriting::analysis_documents",
            Self::FinancialAnalysis { .. } => "underwriting::financial_analysis",
            Self::Customers => "customers::list",
            Self::Customer { .. } => "customers::details",
            Self::Products { .. } => "reference::products",
            Self::Dropdown { .. } => "reference::dropdown",
            Self::Header { .. } => "reference::header",
        }
    }
}
