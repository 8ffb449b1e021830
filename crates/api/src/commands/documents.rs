//! Document and comment commands

use dealdesk_domain::{NewComment, Result};
use serde_json::Value;

use crate::context::AppContext;
use crate::utils::command_helpers::to_output;

/// Documents filtered by deal or assignment; all documents when neither is
/// given.
pub async fn list(ctx: &AppContext, deal: Option<&str>, assignment: Option<&str>) -> Result<Value> {
    let documents = match (deal, assignment) {
        (Some(deal_id), _) => ctx.documents.list_by_deal(deal_id).await?,
        (None, Some(assignment_id)) => ctx.documents.list_by_assignment(assignment_id).await?,
        (None, None) => ctx.documents.list().await?,
    };
    to_output(&documents)
}

pub async fn comments(ctx: &AppContext, deal_id: &str) -> Result<Value> {
    let comments = ctx.comments.list_by_deal(deal_id).await?;
    to_output(&comments)
}

pub async fn add_comment(
    ctx: &AppContext,
    assignment_id: &str,
    deal_id: &str,
    text: &str,
) -> Result<Value> {
    let author = ctx.config.identity.email.clone();
    let comment = NewComment {
        assignment_id: assignment_id.to_string(),
        deal_id: deal_id.to_string(),
        comment_text: text.to_string(),
        created_by: author.clone(),
        last_updated_by: author,
    };
    let created = ctx.comments.create(&comment).await?;
    to_output(&created)
}
