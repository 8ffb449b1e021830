//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ASSIGNED_BY, DEFAULT_CREDIT_OFFICER_ID, DEFAULT_EMPLOYEE_ID, DEFAULT_USER_EMAIL,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Remote deal-desk API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the deal-desk service, without the `/api` prefix
    /// (e.g. `https://dealdesk.example.com`).
    pub base_url: String,
    /// Request timeout. `None` leaves requests unbounded.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Who this client acts as when it writes to the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Credit officer that credit-risk assignments are routed to.
    pub officer_id: String,
    /// Recorded as `assignedBy` on credit-risk assignments.
    pub assigned_by: String,
    pub employee_id: String,
    pub email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            officer_id: DEFAULT_CREDIT_OFFICER_ID.to_string(),
            assigned_by: DEFAULT_ASSIGNED_BY.to_string(),
            employee_id: DEFAULT_EMPLOYEE_ID.to_string(),
            email: DEFAULT_USER_EMAIL.to_string(),
        }
    }
}

impl Config {
    /// Configuration pointing at `base_url` with default identity.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig { base_url: base_url.into(), timeout_secs: None, user_agent: None },
            identity: IdentityConfig::default(),
        }
    }
}
