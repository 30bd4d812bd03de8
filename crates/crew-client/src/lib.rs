//! # crew-client
//!
//! Submits team configurations to the remote orchestration service.
//!
//! [`TeamClient`] is the capability the command depends on; [`HttpTeamClient`]
//! implements it over the service's idempotent
//! `PUT /api/v1/teams/{name}` endpoint. One call is one attempt: there are no
//! retries here, and any timeout comes from the target configuration.

pub mod error;
pub mod http;

use std::future::Future;

use crew_core::{SubmissionOutcome, TeamRequest};

pub use error::ClientError;
pub use http::HttpTeamClient;

/// Idempotent create-or-update of a team keyed by name.
///
/// The remote service decides whether the call created or updated the team.
pub trait TeamClient {
    fn create_or_update(
        &self,
        request: &TeamRequest,
    ) -> impl Future<Output = Result<SubmissionOutcome, ClientError>> + Send;
}
