//! Stage assignments

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::status::Priority;
use crate::utils::serde::string_or_number;

/// Association of a deal with the party responsible for it at one workflow
/// stage. The credit-risk endpoints call the assignee `creditOfficerId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(deserialize_with = "string_or_number")]
    pub assignment_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub deal_id: String,
    #[serde(default, alias = "creditOfficerId", skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<String>,
}

impl Assignment {
    /// Priority as a typed value, `None` when absent or unrecognised.
    pub fn priority(&self) -> Option<Priority> {
        self.priority.as_deref().and_then(|p| p.parse().ok())
    }
}

/// JSON body of `POST /api/credit-risk-assignments/assign`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRiskAssignRequest {
    pub deal_id: String,
    pub credit_officer_id: String,
    pub assigned_by: String,
    pub priority: Priority,
}
