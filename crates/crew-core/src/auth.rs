//! Authorization configuration for a team.
//!
//! Users and groups are opaque, provider-qualified strings of the form
//! `<provider>:<id>` (for example `github:alice` or `github:acme:ops`).
//! Insertion order is preserved for display and duplicates are kept.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Identity providers with dedicated command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Local,
    Github,
    Oidc,
}

impl Provider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Github => "github",
            Self::Oidc => "oidc",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The requested authorization settings for one team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationConfig {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    /// The operator explicitly accepts a team without any authorization.
    #[serde(default)]
    pub no_auth: bool,
}

impl AuthorizationConfig {
    /// True when at least one user or group is configured.
    #[must_use]
    pub fn has_principals(&self) -> bool {
        !self.users.is_empty() || !self.groups.is_empty()
    }

    /// A configuration is safe to submit when it names a principal or the
    /// no-auth override was set.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.has_principals() || self.no_auth
    }
}

/// Accumulates provider flags into an [`AuthorizationConfig`].
///
/// Each method names the flag it serves so rejected values can be reported
/// against the flag the operator actually typed.
#[derive(Debug, Default)]
pub struct AuthorizationBuilder {
    config: AuthorizationConfig,
}

impl AuthorizationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user for a known provider.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdentifier` if `name` is blank.
    pub fn user(
        &mut self,
        flag: &'static str,
        provider: Provider,
        name: &str,
    ) -> Result<&mut Self, CoreError> {
        let id = require_id(flag, name)?;
        self.config.users.push(format!("{provider}:{id}"));
        Ok(self)
    }

    /// Add a group for a known provider.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdentifier` if `name` is blank.
    pub fn group(
        &mut self,
        flag: &'static str,
        provider: Provider,
        name: &str,
    ) -> Result<&mut Self, CoreError> {
        let id = require_id(flag, name)?;
        self.config.groups.push(format!("{provider}:{id}"));
        Ok(self)
    }

    /// Add a GitHub team given as `org:team`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdentifier` unless both halves are present.
    pub fn github_team(&mut self, flag: &'static str, spec: &str) -> Result<&mut Self, CoreError> {
        match split_pair(spec) {
            Some((org, team)) => {
                self.config
                    .groups
                    .push(format!("{}:{org}:{team}", Provider::Github));
                Ok(self)
            }
            None => Err(CoreError::InvalidIdentifier {
                flag,
                value: spec.to_string(),
                reason: "expected ORG:TEAM",
            }),
        }
    }

    /// Add an already-qualified `provider:id` user.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdentifier` if the value is not qualified.
    pub fn qualified_user(
        &mut self,
        flag: &'static str,
        raw: &str,
    ) -> Result<&mut Self, CoreError> {
        let value = require_qualified(flag, raw)?;
        self.config.users.push(value);
        Ok(self)
    }

    /// Add an already-qualified `provider:id` group.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdentifier` if the value is not qualified.
    pub fn qualified_group(
        &mut self,
        flag: &'static str,
        raw: &str,
    ) -> Result<&mut Self, CoreError> {
        let value = require_qualified(flag, raw)?;
        self.config.groups.push(value);
        Ok(self)
    }

    pub fn no_auth(&mut self, enabled: bool) -> &mut Self {
        self.config.no_auth = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> AuthorizationConfig {
        self.config
    }
}

fn require_id<'a>(flag: &'static str, name: &'a str) -> Result<&'a str, CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::InvalidIdentifier {
            flag,
            value: name.to_string(),
            reason: "must not be empty",
        });
    }
    Ok(name)
}

fn require_qualified(flag: &'static str, raw: &str) -> Result<String, CoreError> {
    if split_pair(raw).is_none() {
        return Err(CoreError::InvalidIdentifier {
            flag,
            value: raw.to_string(),
            reason: "expected PROVIDER:ID",
        });
    }
    Ok(raw.to_string())
}

fn split_pair(raw: &str) -> Option<(&str, &str)> {
    let (left, right) = raw.split_once(':')?;
    if left.trim().is_empty() || right.trim().is_empty() {
        return None;
    }
    Some((left, right))
}
