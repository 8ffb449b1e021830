//! Stage assignment commands

use dealdesk_domain::{Assignment, Priority, Result, WorkflowStage};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::to_output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StageAssignments {
    stage: WorkflowStage,
    assignments: Vec<Assignment>,
}

pub async fn submitted(ctx: &AppContext, stage: WorkflowStage) -> Result<Value> {
    let deals = ctx.workflow.submitted_deals(stage).await?;
    info!(%stage, count = deals.len(), "fetched submitted deals");
    to_output(&deals)
}

pub async fn assign(
    ctx: &AppContext,
    stage: WorkflowStage,
    deal_id: &str,
    priority: Option<Priority>,
) -> Result<Value> {
    let assignment = ctx.workflow.assign(stage, deal_id, priority).await?;
    to_output(&assignment)
}

pub async fn assignment(
    ctx: &AppContext,
    stage: WorkflowStage,
    assignment_id: &str,
) -> Result<Value> {
    let assignment = ctx.workflow.desk(stage)?.assignment(assignment_id).await?;
    to_output(&assignment)
}

pub async fn assignments_for_deal(ctx: &AppContext, deal_id: &str) -> Result<Value> {
    let per_stage: Vec<StageAssignments> = ctx
        .workflow
        .assignments_for_deal(deal_id)
        .await?
        .into_iter()
        .map(|(stage, assignments)| StageAssignments { stage, assignments })
        .collect();
    to_output(&per_stage)
}

pub async fn my_assignments(ctx: &AppContext) -> Result<Value> {
    let assignments = ctx.credit_risk.my_assignments().await?;
    to_output(&assignments)
}
