//! API-specific error types
//!
//! Every failure of a remote operation displays as that operation's fixed
//! message. The raw cause stays reachable through `source()` and the
//! accessors below.

use dealdesk_domain::{DealDeskError, WorkflowStage};
use reqwest::StatusCode;
use thiserror::Error;

use super::operations::Operation;

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("{}", .operation.failure_message())]
    Status { operation: Operation, status: StatusCode, body: String },

    /// Request never produced a response, or the body could not be read
    #[error("{}", .operation.failure_message())]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Response body did not match the expected shape
    #[error("{}", .operation.failure_message())]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// Request payload could not be serialized
    #[error("{}", .operation.failure_message())]
    Encode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// The stage has no endpoint for this operation; nothing was sent
    #[error("{operation} is not available for the {stage} stage")]
    Unsupported { operation: Operation, stage: WorkflowStage },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Operation that failed, if the error came from one
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Status { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Encode { operation, .. }
            | Self::Unsupported { operation, .. } => Some(*operation),
            Self::Config(_) => None,
        }
    }

    /// HTTP status for `Status` errors
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Description of the underlying cause, for diagnostics
    pub fn cause(&self) -> String {
        match self {
            Self::Status { status, body, .. } if body.is_empty() => format!("HTTP {status}"),
            Self::Status { status, body, .. } => format!("HTTP {status}: {body}"),
            Self::Transport { source, .. } => source.to_string(),
            Self::Decode { source, .. } | Self::Encode { source, .. } => source.to_string(),
            Self::Unsupported { .. } | Self::Config(_) => self.to_string(),
        }
    }
}

impl From<ApiError> for DealDeskError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Config(message) => Self::Config(message),
            ApiError::Unsupported { .. } => Self::Unsupported(err.to_string()),
            other => Self::Service(other.to_string()),
        }
    }
}
