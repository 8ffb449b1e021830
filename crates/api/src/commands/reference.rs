//! Reference data and identity commands

use dealdesk_domain::Result;
use dealdesk_infra::CatalogLevel;
use serde::Serialize;
use serde_json::Value;

use crate::context::AppContext;
use crate::utils::command_helpers::to_output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeaderSummary<'a> {
    employee_id: &'a str,
    email: &'a str,
    manager_view: bool,
}

pub async fn financials(ctx: &AppContext, deal_id: &str) -> Result<Value> {
    to_output(&ctx.attachments.financial_statuses(deal_id).await?)
}

pub async fn dropdown(ctx: &AppContext, field: &str) -> Result<Value> {
    to_output(&ctx.reference.dropdown_values(field).await?)
}

/// Business domains, or the children of `parent` at `level`
pub async fn products(
    ctx: &AppContext,
    level: Option<CatalogLevel>,
    parent: Option<&str>,
) -> Result<Value> {
    let entries = match (level, parent) {
        (Some(level), Some(parent_id)) => ctx.reference.catalog_entries(level, parent_id).await?,
        _ => ctx.reference.business_domains().await?,
    };
    to_output(&entries)
}

pub fn header(ctx: &AppContext, manager: bool) -> Result<Value> {
    let mut header = ctx.header_state();
    header.set_manager_view(manager);
    to_output(&HeaderSummary {
        employee_id: header.employee_id(),
        email: header.email(),
        manager_view: header.is_manager_view(),
    })
}
