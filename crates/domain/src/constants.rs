//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Normalization defaults for deal listings
pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_DEAL_PHASE: &str = "Initial";

// Placeholders rendered by presentation models
pub const TAB_CONTENT_PLACEHOLDER: &str = "Content not available";
pub const WORKFLOW_EMPTY_PLACEHOLDER: &str = "No workflow stages to display.";

// Identity placeholders for an unconfigured client. Real deployments set
// the DEALDESK_* identity variables.
pub const DEFAULT_CREDIT_OFFICER_ID: &str = "credit.officer@dealdesk.invalid";
pub const DEFAULT_ASSIGNED_BY: &str = "credit.officer@dealdesk.invalid";
pub const DEFAULT_EMPLOYEE_ID: &str = "EMP000000";
pub const DEFAULT_USER_EMAIL: &str = "credit.officer@dealdesk.invalid";

// Recorded as `lastUpdatedBy` by underwriter review decisions
pub const UNDERWRITER_ACTOR: &str = "Underwriter";
