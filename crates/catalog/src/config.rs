//! Environment-driven catalog client configuration.

use std::time::Duration;

use crate::api::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::{CatalogError, CatalogResult};

pub const ENV_API_BASE_URL: &str = "COMMERCE_API_BASE_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "COMMERCE_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse configuration from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to defaults (with a warning); set but
    /// malformed values are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CatalogResult<Self> {
        let api_base_url = match lookup(ENV_API_BASE_URL) {
            Some(raw) => parse_base_url(&raw)?,
            None => {
                tracing::warn!("{ENV_API_BASE_URL} not set; using {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_string()
            }
        };

        let request_timeout = match lookup(ENV_API_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}

fn parse_base_url(raw: &str) -> CatalogResult<String> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(CatalogError::config(format!("{ENV_API_BASE_URL} is empty")));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CatalogError::config(format!(
            "{ENV_API_BASE_URL} must start with http:// or https:// (got {url:?})"
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}

fn parse_timeout(raw: &str) -> CatalogResult<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(CatalogError::config(format!(
            "{ENV_API_TIMEOUT_SECS} must be a positive number of seconds (got {raw:?})"
        ))),
    }
}
