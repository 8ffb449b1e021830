//! Deal lifecycle commands

use std::path::Path;

use dealdesk_domain::{
    Collateral, Commitment, DealStatus, FinancialStatus, NewDraftDeal, Result, SpecialCondition,
};
use serde_json::{json, Value};
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::{read_json_input, to_output};

pub async fn get(ctx: &AppContext, deal_id: &str) -> Result<Value> {
    to_output(&ctx.lifecycle.deal(deal_id).await?)
}

pub async fn create_draft(
    ctx: &AppContext,
    customer_id: String,
    customer_name: String,
    initiator: Option<String>,
) -> Result<Value> {
    let draft = NewDraftDeal {
        customer_id,
        customer_name,
        initiator: initiator.unwrap_or_else(|| ctx.config.identity.email.clone()),
    };
    to_output(&ctx.deals.create_draft(&draft).await?)
}

pub async fn set_status(ctx: &AppContext, deal_id: &str, status: DealStatus) -> Result<Value> {
    to_output(&ctx.lifecycle.update_status(deal_id, status).await?)
}

pub async fn submit(ctx: &AppContext, deal_id: &str) -> Result<Value> {
    to_output(&ctx.deals.submit(deal_id).await?)
}

pub async fn approve(ctx: &AppContext, deal_id: &str) -> Result<Value> {
    ctx.lifecycle.approve(deal_id).await?;
    info!(deal_id, "deal approved");
    Ok(json!({ "dealId": deal_id, "dealStatus": DealStatus::Approved }))
}

pub async fn reject(ctx: &AppContext, deal_id: &str) -> Result<Value> {
    ctx.lifecycle.reject(deal_id).await?;
    info!(deal_id, "deal rejected");
    Ok(json!({ "dealId": deal_id, "dealStatus": DealStatus::Rejected }))
}

pub async fn add_collateral(ctx: &AppContext, file: &Path) -> Result<Value> {
    let collateral: Collateral = read_json_input(file)?;
    to_output(&ctx.collateral.create(&collateral).await?)
}

pub async fn add_commitment(ctx: &AppContext, file: &Path) -> Result<Value> {
    let commitment: Commitment = read_json_input(file)?;
    to_output(&ctx.attachments.create_commitment(&commitment).await?)
}

pub async fn add_financial_status(ctx: &AppContext, file: &Path) -> Result<Value> {
    let status: FinancialStatus = read_json_input(file)?;
    to_output(&ctx.attachments.create_financial_status(&status).await?)
}

/// Record a special condition authored by the configured user.
pub async fn add_special_condition(
    ctx: &AppContext,
    deal_id: String,
    condition_number: i64,
    description: String,
) -> Result<Value> {
    let author = ctx.config.identity.email.clone();
    let condition = SpecialCondition {
        deal_id,
        condition_number,
        description,
        created_by: Some(author.clone()),
        created_date_time: None,
        last_updated_by: Some(author),
        last_updated_date_time: None,
    };
    to_output(&ctx.attachments.add_special_condition(&condition).await?)
}

pub async fn special_conditions(ctx: &AppContext, deal_id: &str) -> Result<Value> {
    to_output(&ctx.attachments.special_conditions(deal_id).await?)
}
