//! Wire-level enumerations shared by the service clients

use crate::impl_domain_status_conversions;

/// Assignment priority. The API treats an omitted priority as `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl_domain_status_conversions!(Priority {
    Low => "Low",
    Medium => "Medium",
    High => "High",
    Critical => "Critical",
});

/// Lifecycle status of a deal as the dashboard endpoints spell it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealStatus {
    Draft,
    Submitted,
    InProgress,
    InReview,
    Approved,
    Rejected,
}

impl_domain_status_conversions!(DealStatus {
    Draft => "Draft",
    Submitted => "Submitted",
    InProgress => "In-Progress",
    InReview => "In Review",
    Approved => "Approved",
    Rejected => "Rejected",
});

/// Business stage a deal passes through after submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowStage {
    CreditRisk,
    Documentation,
    Legal,
}

impl_domain_status_conversions!(WorkflowStage {
    CreditRisk => "credit-risk",
    Documentation => "documentation",
    Legal => "legal",
});

impl WorkflowStage {
    pub const ALL: [Self; 3] = [Self::CreditRisk, Self::Documentation, Self::Legal];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Priority::default().to_string(), "Medium");
    }

    #[test]
    fn deal_status_wire_strings() {
        assert_eq!(DealStatus::InProgress.as_str(), "In-Progress");
        assert_eq!(DealStatus::InReview.as_str(), "In Review");
        assert_eq!("in-progress".parse::<DealStatus>().unwrap(), DealStatus::InProgress);
    }

    #[test]
    fn workflow_stage_parses_case_insensitively() {
        for stage in WorkflowStage::ALL {
            let upper = stage.as_str().to_ascii_uppercase();
            assert_eq!(upper.parse::<WorkflowStage>().unwrap(), stage);
        }
    }
}
