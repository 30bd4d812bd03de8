//! Wire types for the team create-or-update contract.

use serde::{Deserialize, Serialize};

use crate::auth::AuthorizationConfig;

/// Authorization payload as the remote service stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAuth {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl From<&AuthorizationConfig> for TeamAuth {
    fn from(config: &AuthorizationConfig) -> Self {
        Self {
            users: config.users.clone(),
            groups: config.groups.clone(),
        }
    }
}

/// Request body for a single create-or-update submission.
///
/// Only constructed after the configuration passed the safety policy and the
/// operator confirmed; fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRequest {
    name: String,
    auth: TeamAuth,
}

impl TeamRequest {
    #[must_use]
    pub fn new(name: impl Into<String>, config: &AuthorizationConfig) -> Self {
        Self {
            name: name.into(),
            auth: TeamAuth::from(config),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn auth(&self) -> &TeamAuth {
        &self.auth
    }
}

/// A team as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub auth: TeamAuth,
}

/// Result of a create-or-update call. Exactly one case applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Created(Team),
    /// The team already existed. Also used when nothing changed.
    Updated(Team),
}

impl SubmissionOutcome {
    #[must_use]
    pub const fn created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    #[must_use]
    pub const fn updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    #[must_use]
    pub const fn team(&self) -> &Team {
        match self {
            Self::Created(team) | Self::Updated(team) => team,
        }
    }

    /// The single line printed to the operator.
    #[must_use]
    pub const fn report(&self) -> &'static str {
        match self {
            Self::Created(_) => "team created",
            Self::Updated(_) => "team updated",
        }
    }
}
