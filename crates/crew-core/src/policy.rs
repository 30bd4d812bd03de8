//! Safety policy for team authorization.
//!
//! A configuration is accepted when it names at least one user or group, or
//! when the operator passed the explicit no-auth override. Rejection is a
//! [`PolicyViolation`] value; callers decide how to stop the command, this
//! module never terminates the process.

use thiserror::Error;

use crate::auth::AuthorizationConfig;

/// Outcome of an accepted policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyVerdict {
    /// Users or groups are configured and no override was requested.
    Authorized,
    /// No users or groups, accepted only because of the override.
    Unrestricted,
    /// The override was passed alongside users or groups and has no effect.
    OverrideIgnored,
}

impl PolicyVerdict {
    /// Standalone warning to show the operator before confirmation, if any.
    #[must_use]
    pub const fn warning(self) -> Option<&'static str> {
        match self {
            Self::Authorized => None,
            Self::Unrestricted => Some("no auth methods configured. you asked for it!"),
            Self::OverrideIgnored => {
                Some("users or groups are configured; the no-auth override has no effect")
            }
        }
    }
}

/// A configuration that must never be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("no auth methods configured")]
    NoAuthMethods,
}

/// Check a configuration against the safety policy.
///
/// # Errors
///
/// Returns `PolicyViolation::NoAuthMethods` when there are no users, no
/// groups, and no override.
pub fn validate(config: &AuthorizationConfig) -> Result<PolicyVerdict, PolicyViolation> {
    match (config.has_principals(), config.no_auth) {
        (true, false) => Ok(PolicyVerdict::Authorized),
        (true, true) => Ok(PolicyVerdict::OverrideIgnored),
        (false, true) => Ok(PolicyVerdict::Unrestricted),
        (false, false) => Err(PolicyViolation::NoAuthMethods),
    }
}
