//! Logging setup and command outcome logging
//!
//! The CLI installs one `tracing` subscriber at startup; command handlers
//! report their outcome through [`log_command_execution`].

use std::time::Duration;

use dealdesk_domain::DealDeskError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` selects the level (default
/// `info`); `json` switches to one JSON object per line. Logs go to stderr
/// so stdout carries only command output.
///
/// Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed =
        if json { builder.json().try_init().is_ok() } else { builder.try_init().is_ok() };
    if !installed {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"workflow::assign"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - The failure, if the command failed.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&DealDeskError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = error_label(err),
            "command_execution_failure"
        ),
    }
}

/// Convert a `DealDeskError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &DealDeskError) -> &'static str {
    match error {
        DealDeskError::Service(_) => "service",
        DealDeskError::Config(_) => "config",
        DealDeskError::NotFound(_) => "not_found",
        DealDeskError::InvalidInput(_) => "invalid_input",
        DealDeskError::Unsupported(_) => "unsupported",
        DealDeskError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&DealDeskError::Service("Failed to fetch deal".into())), "service");
        assert_eq!(error_label(&DealDeskError::Unsupported("x".into())), "unsupported");
        assert_eq!(error_label(&DealDeskError::InvalidInput("x".into())), "invalid_input");
    }
}
