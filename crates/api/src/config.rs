//! Application configuration

use std::env;

use hostredirect_shared::{HostRedirector, CANONICAL_ORIGIN, LEGACY_HOST};
use url::Url;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Redirect policy
    pub legacy_host: String,
    pub canonical_origin: String, // scheme + host, no trailing slash

    // Logging
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            legacy_host: LEGACY_HOST.to_string(),
            canonical_origin: CANONICAL_ORIGIN.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),

            // Redirect policy
            legacy_host: validate_legacy_host(
                env::var("LEGACY_HOST").unwrap_or_else(|_| LEGACY_HOST.to_string()),
            )?,
            canonical_origin: validate_canonical_origin(
                env::var("CANONICAL_ORIGIN").unwrap_or_else(|_| CANONICAL_ORIGIN.to_string()),
            )?,

            // Logging
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                Ok("pretty") | Err(_) => LogFormat::Pretty,
                Ok(other) => {
                    return Err(ConfigError::Invalid("LOG_FORMAT", other.to_string()));
                }
            },
        })
    }

    /// Build the redirector this configuration describes
    pub fn redirector(&self) -> HostRedirector {
        HostRedirector::new(self.legacy_host.clone(), self.canonical_origin.clone())
    }
}

/// A bare hostname: non-empty, no scheme, no path.
fn validate_legacy_host(host: String) -> Result<String, ConfigError> {
    if host.is_empty() || host.contains("://") || host.contains('/') {
        return Err(ConfigError::Invalid("LEGACY_HOST", host));
    }
    Ok(host)
}

/// An http(s) origin with a host and nothing after it. A single trailing
/// slash is tolerated and stripped so uris can be appended directly.
fn validate_canonical_origin(origin: String) -> Result<String, ConfigError> {
    let invalid = || ConfigError::Invalid("CANONICAL_ORIGIN", origin.clone());

    let parsed = Url::parse(&origin).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https")
        || parsed.host_str().is_none()
        || parsed.path() != "/"
        || parsed.query().is_some()
        || parsed.fragment().is_some()
    {
        return Err(invalid());
    }

    Ok(origin.trim_end_matches('/').to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
