//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the base URL is not set there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DEALDESK_API_BASE_URL`: Origin of the deal-desk service (required)
//! - `DEALDESK_API_TIMEOUT_SECS`: Request timeout in seconds (unset = none)
//! - `DEALDESK_API_USER_AGENT`: User agent sent with every request
//! - `DEALDESK_OFFICER_ID`: Credit officer for credit-risk assignments
//! - `DEALDESK_ASSIGNED_BY`: Recorded as `assignedBy` on assignments
//! - `DEALDESK_EMPLOYEE_ID`: Employee id shown in the header
//! - `DEALDESK_USER_EMAIL`: Email shown in the header
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./dealdesk.json` or `./dealdesk.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use dealdesk_domain::{ApiConfig, Config, DealDeskError, IdentityConfig, Result};
use url::Url;

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `DealDeskError::Config` if configuration cannot be loaded from
/// either source, the file format is invalid, or the base URL is not an
/// absolute http(s) URL.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `DEALDESK_API_BASE_URL` is required; identity variables fall back to
/// the built-in placeholders.
///
/// # Errors
/// Returns `DealDeskError::Config` if the base URL is missing or invalid, or
/// the timeout is not a number.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("DEALDESK_API_BASE_URL")?;
    let timeout_secs = optional_env("DEALDESK_API_TIMEOUT_SECS")
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| DealDeskError::Config(format!("Invalid request timeout: {}", e)))
        })
        .transpose()?;
    let user_agent = optional_env("DEALDESK_API_USER_AGENT");

    let defaults = IdentityConfig::default();
    let officer_id = optional_env("DEALDESK_OFFICER_ID").unwrap_or_else(|| {
        tracing::warn!(
            officer_id = %defaults.officer_id,
            "DEALDESK_OFFICER_ID not set; credit-risk assignments use the placeholder officer"
        );
        defaults.officer_id.clone()
    });
    let identity = IdentityConfig {
        officer_id,
        assigned_by: optional_env("DEALDESK_ASSIGNED_BY").unwrap_or(defaults.assigned_by),
        employee_id: optional_env("DEALDESK_EMPLOYEE_ID").unwrap_or(defaults.employee_id),
        email: optional_env("DEALDESK_USER_EMAIL").unwrap_or(defaults.email),
    };

    validate(Config { api: ApiConfig { base_url, timeout_secs, user_agent }, identity })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DealDeskError::Config` if the file is missing, cannot be parsed,
/// or holds an invalid base URL.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DealDeskError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DealDeskError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DealDeskError::Config(format!("Failed to read config file: {}", e)))?;

    validate(parse_config(&contents, &config_path)?)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DealDeskError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DealDeskError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DealDeskError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Check the base URL and strip any trailing slash.
fn validate(mut config: Config) -> Result<Config> {
    let trimmed = config.api.base_url.trim().trim_end_matches('/').to_string();
    let parsed = Url::parse(&trimmed)
        .map_err(|e| DealDeskError::Config(format!("Invalid API base URL '{}': {}", trimmed, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DealDeskError::Config(format!(
            "API base URL must use http or https, got '{}'",
            parsed.scheme()
        )));
    }

    config.api.base_url = trimmed;
    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.json", "config.toml", "dealdesk.json", "dealdesk.toml"];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    optional_env(key).ok_or_else(|| {
        DealDeskError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Non-empty value of an environment variable
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
