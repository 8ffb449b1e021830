//! Customer directory commands

use dealdesk_domain::Result;
use serde_json::Value;

use crate::context::AppContext;
use crate::utils::command_helpers::to_output;

pub async fn list(ctx: &AppContext) -> Result<Value> {
    to_output(&ctx.customers.customers().await?)
}

pub async fn details(ctx: &AppContext, customer_id: &str) -> Result<Value> {
    to_output(&ctx.customers.customer_details(customer_id).await?)
}
