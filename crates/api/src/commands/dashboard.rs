//! Dashboard commands

use dealdesk_core::ui::status_badge_style;
use dealdesk_domain::{Deal, DealStatus, Result};
use serde::Serialize;
use serde_json::Value;

use crate::context::AppContext;
use crate::utils::command_helpers::to_output;

/// Deal listing entry with the badge classes its status renders with
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DealListing {
    #[serde(flatten)]
    deal: Deal,
    badge_class: String,
}

impl From<Deal> for DealListing {
    fn from(deal: Deal) -> Self {
        let badge_class = status_badge_style(deal.status.as_deref().unwrap_or_default()).class();
        Self { deal, badge_class }
    }
}

pub async fn status_counts(ctx: &AppContext) -> Result<Value> {
    to_output(&ctx.dashboard.status_counts().await?)
}

pub async fn metrics(ctx: &AppContext) -> Result<Value> {
    to_output(&ctx.metrics.metrics().await?)
}

pub async fn all_deals(ctx: &AppContext) -> Result<Value> {
    to_output(&ctx.metrics.all_deals().await?)
}

pub async fn deals(ctx: &AppContext, status: DealStatus) -> Result<Value> {
    let listing: Vec<DealListing> =
        ctx.dashboard.deals_by_status(status).await?.into_iter().map(DealListing::from).collect();
    to_output(&listing)
}
