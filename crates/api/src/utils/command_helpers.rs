//! Command execution helpers
//!
//! Every command runs through [`execute_with_logging`] so timing and
//! outcome logging look the same across the CLI.

use std::fs;
use std::future::Future;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use dealdesk_domain::{DealDeskError, Result as DomainResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::utils::logging::log_command_execution;

/// Execute a command, timing it and logging the outcome once.
pub async fn execute_with_logging<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;
    log_command_execution(command_name, start.elapsed(), result.as_ref().err());
    result
}

/// Serialize a command result for output.
pub fn to_output<T: Serialize>(value: &T) -> DomainResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| DealDeskError::Internal(format!("failed to encode command output: {e}")))
}

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_json_input<T: DeserializeOwned>(path: &Path) -> DomainResult<T> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| DealDeskError::InvalidInput(format!("failed to read stdin: {e}")))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| {
            DealDeskError::InvalidInput(format!("failed to read {}: {e}", path.display()))
        })?
    };

    serde_json::from_str(&raw).map_err(|e| {
        DealDeskError::InvalidInput(format!("invalid JSON in {}: {e}", path.display()))
    })
}
