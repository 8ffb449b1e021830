//! Command handlers
//!
//! Each handler calls one service operation and returns its result as JSON.
//! Failures keep the fixed operation message the clients produce.

pub mod customers;
pub mod dashboard;
pub mod deals;
pub mod documents;
pub mod reference;
pub mod underwriting;
pub mod workflow;

use dealdesk_domain::Result;
use serde_json::Value;

use crate::cli::Command;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_with_logging;

/// Run one command against the context.
pub async fn execute(ctx: &AppContext, command: Command) -> Result<Value> {
    let name = command.name();
    execute_with_logging(name, || dispatch(ctx, command)).await
}

async fn dispatch(ctx: &AppContext, command: Command) -> Result<Value> {
    match command {
        Command::Submitted { stage } => workflow::submitted(ctx, stage).await,
        Command::Assign { stage, deal_id, priority } => {
            workflow::assign(ctx, stage, &deal_id, priority).await
        }
        Command::Assignment { stage, assignment_id } => {
            workflow::assignment(ctx, stage, &assignment_id).await
        }
        Command::Assignments { deal_id } => workflow::assignments_for_deal(ctx, &deal_id).await,
        Command::MyAssignments => workflow::my_assignments(ctx).await,
        Command::Documents { deal, assignment } => {
            documents::list(ctx, deal.as_deref(), assignment.as_deref()).await
        }
        Command::Comments { deal_id } => documents::comments(ctx, &deal_id).await,
        Command::AddComment { assignment_id, deal_id, text } => {
            documents::add_comment(ctx, &assignment_id, &deal_id, &text).await
        }
        Command::AddCollateral { file } => deals::add_collateral(ctx, &file).await,
        Command::AddCommitment { file } => deals::add_commitment(ctx, &file).await,
        Command::AddFinancialStatus { file } => deals::add_financial_status(ctx, &file).await,
        Command::AddSpecialCondition { deal_id, condition_number, description } => {
            deals::add_special_condition(ctx, deal_id, condition_number, description).await
        }
        Command::SpecialConditions { deal_id } => deals::special_conditions(ctx, &deal_id).await,
        Command::StatusCounts => dashboard::status_counts(ctx).await,
        Command::Metrics => dashboard::metrics(ctx).await,
        Command::AllDeals => dashboard::all_deals(ctx).await,
        Command::Deals { status } => dashboard::deals(ctx, status).await,
        Command::Deal { deal_id } => deals::get(ctx, &deal_id).await,
        Command::CreateDraft { customer_id, customer_name, initiator } => {
            deals::create_draft(ctx, customer_id, customer_name, initiator).await
        }
        Command::SetStatus { deal_id, status } => deals::set_status(ctx, &deal_id, status).await,
        Command::Submit { deal_id } => deals::submit(ctx, &deal_id).await,
        Command::Approve { deal_id } => deals::approve(ctx, &deal_id).await,
        Command::Reject { deal_id } => deals::reject(ctx, &deal_id).await,
        Command::Financials { deal_id } => reference::financials(ctx, &deal_id).await,
        Command::UnderwriterQueue => underwriting::queue(ctx).await,
        Command::AnalysisDocuments { deal_id, document_type } => {
            underwriting::analysis_documents(ctx, &deal_id, document_type.as_deref()).await
        }
        Command::FinancialAnalysis { deal_id } => {
            underwriting::financial_analysis(ctx, &deal_id).await
        }
        Command::Customers => customers::list(ctx).await,
        Command::Customer { customer_id } => customers::details(ctx, &customer_id).await,
        Command::Products { level, parent } => {
            reference::products(ctx, level.map(Into::into), parent.as_deref()).await
        }
        Command::Dropdown { field } => reference::dropdown(ctx, &field).await,
        Command::Header { manager } => reference::header(ctx, manager),
    }
}
