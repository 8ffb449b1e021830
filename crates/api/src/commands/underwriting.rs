//! Underwriter desk commands

use dealdesk_domain::Result;
use serde_json::Value;
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::to_output;

pub async fn queue(ctx: &AppContext) -> Result<Value> {
    let deals = ctx.underwriter.submitted_deals().await?;
    info!(count = deals.len(), "fetched underwriter queue");
    to_output(&deals)
}

pub async fn analysis_documents(
    ctx: &AppContext,
    deal_id: &str,
    document_type: Option<&str>,
) -> Result<Value> {
    let documents = match document_type {
        Some(kind) => ctx.analysis_documents.list_by_deal_and_type(deal_id, kind).await?,
        None => ctx.analysis_documents.list_by_deal(deal_id).await?,
    };
    to_output(&documents)
}

pub async fn financial_analysis(ctx: &AppContext, deal_id: &str) -> Result<Value> {
    to_output(&ctx.financial_analysis.by_deal(deal_id).await?)
}
