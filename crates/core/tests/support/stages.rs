//! In-memory stage desk

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dealdesk_core::StageAssignmentPort;
use dealdesk_domain::{
    Assignment, Deal, DealDeskError, Priority, Result as DomainResult, WorkflowStage,
};

/// Records assignments in memory and serves a fixed deal listing.
#[derive(Clone)]
pub struct MockStageDesk {
    stage: WorkflowStage,
    deals: Vec<Deal>,
    assignments: Arc<Mutex<Vec<Assignment>>>,
    fail_with: Option<String>,
}

impl MockStageDesk {
    pub fn new(stage: WorkflowStage) -> Self {
        Self { stage, deals: Vec::new(), assignments: Arc::default(), fail_with: None }
    }

    pub fn with_deal(mut self, deal: Deal) -> Self {
        self.deals.push(deal);
        self
    }

    /// Every call fails with a service error carrying `message`.
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn recorded(&self) -> Vec<Assignment> {
        self.assignments.lock().unwrap().clone()
    }

    fn check(&self) -> DomainResult<()> {
        match &self.fail_with {
            Some(message) => Err(DealDeskError::Service(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StageAssignmentPort for MockStageDesk {
    fn stage(&self) -> WorkflowStage {
        self.stage
    }

    async fn submitted_deals(&self) -> DomainResult<Vec<Deal>> {
        self.check()?;
        Ok(self.deals.clone())
    }

    async fn assign_deal(
        &self,
        deal_id: &str,
        priority: Option<Priority>,
    ) -> DomainResult<Assignment> {
        self.check()?;
        let mut assignments = self.assignments.lock().unwrap();
        let assignment = Assignment {
            assignment_id: format!("{}-{}", self.stage, assignments.len() + 1),
            deal_id: deal_id.to_string(),
            assignee_id: None,
            assignment_status: Some("Assigned".to_string()),
            priority: Some(priority.unwrap_or_default().to_string()),
            status: None,
            assigned_date_time: None,
            completed_date_time: None,
            created_by: None,
            created_date_time: None,
            last_updated_by: None,
            last_updated_date_time: None,
        };
        assignments.push(assignment.clone());
        Ok(assignment)
    }

    async fn assignment(&self, assignment_id: &str) -> DomainResult<Assignment> {
        self.check()?;
        self.recorded()
            .into_iter()
            .find(|a| a.assignment_id == assignment_id)
            .ok_or_else(|| DealDeskError::NotFound(assignment_id.to_string()))
    }

    async fn assignments_by_deal(&self, deal_id: &str) -> DomainResult<Vec<Assignment>> {
        self.check()?;
        Ok(self.recorded().into_iter().filter(|a| a.deal_id == deal_id).collect())
    }
}
