//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for DealDesk
///
/// `Service` carries the fixed, operation-specific message a failed API
/// call reports to its caller (for example `Failed to fetch submitted
/// deals`). The raw cause has already been logged by the client that
/// produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DealDeskError {
    #[error("{0}")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for DealDesk operations
pub type Result<T> = std::result::Result<T, DealDeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_displays_bare_message() {
        let err = DealDeskError::Service("Failed to fetch submitted deals".into());
        assert_eq!(err.to_string(), "Failed to fetch submitted deals");
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = DealDeskError::Config("missing base url".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Config");
        assert_eq!(json["message"], "missing base url");
    }
}
