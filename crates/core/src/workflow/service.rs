//! Workflow desk - routes work to the per-stage assignment desks

use std::sync::Arc;

use dealdesk_domain::{Assignment, Deal, DealDeskError, Priority, Result, WorkflowStage};
use tracing::debug;

use super::ports::StageAssignmentPort;

/// One assignment desk per workflow stage
pub struct WorkflowDesk {
    desks: Vec<Arc<dyn StageAssignmentPort>>,
}

impl WorkflowDesk {
    /// Build from a set of stage desks. A later desk for the same stage
    /// replaces an earlier one.
    pub fn new(desks: impl IntoIterator<Item = Arc<dyn StageAssignmentPort>>) -> Self {
        let mut registered: Vec<Arc<dyn StageAssignmentPort>> = Vec::new();
        for desk in desks {
            registered.retain(|existing| existing.stage() != desk.stage());
            registered.push(desk);
        }
        Self { desks: registered }
    }

    /// Stages that have a desk, in registration order
    pub fn stages(&self) -> Vec<WorkflowStage> {
        self.desks.iter().map(|desk| desk.stage()).collect()
    }

    pub fn desk(&self, stage: WorkflowStage) -> Result<&Arc<dyn StageAssignmentPort>> {
        self.desks.iter().find(|desk| desk.stage() == stage).ok_or_else(|| {
            DealDeskError::Unsupported(format!("no assignment desk configured for {stage}"))
        })
    }

    pub async fn submitted_deals(&self, stage: WorkflowStage) -> Result<Vec<Deal>> {
        self.desk(stage)?.submitted_deals().await
    }

    pub async fn assign(
        &self,
        stage: WorkflowStage,
        deal_id: &str,
        priority: Option<Priority>,
    ) -> Result<Assignment> {
        debug!(%stage, deal_id, ?priority, "routing deal assignment");
        self.desk(stage)?.assign_deal(deal_id, priority).await
    }

    /// Assignments for a deal across every registered stage. Stops at the
    /// first failing stage.
    pub async fn assignments_for_deal(
        &self,
        deal_id: &str,
    ) -> Result<Vec<(WorkflowStage, Vec<Assignment>)>> {
        let mut collected = Vec::with_capacity(self.desks.len());
        for desk in &self.desks {
            let assignments = desk.assignments_by_deal(deal_id).await?;
            collected.push((desk.stage(), assignments));
        }
        Ok(collected)
    }
}
