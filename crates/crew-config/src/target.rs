//! Remote service targets.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Connection settings for one remote orchestration service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TargetConfig {
    /// Base API URL, e.g. `https://ci.example.com`.
    #[serde(default)]
    pub api: String,

    /// Bearer token for an already-authenticated session.
    #[serde(default)]
    pub token: String,

    /// Accept invalid TLS certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Request timeout handed to the HTTP client. `None` keeps the client default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl TargetConfig {
    pub fn is_configured(&self) -> bool {
        !self.api.is_empty() && !self.token.is_empty()
    }

    /// Check required fields, naming the first one that is missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when `api` or `token` is empty.
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let missing = if self.api.is_empty() {
            "api"
        } else if self.token.is_empty() {
            "token"
        } else {
            return Ok(());
        };
        Err(ConfigError::NotConfigured {
            name: name.to_string(),
            missing,
        })
    }
}
