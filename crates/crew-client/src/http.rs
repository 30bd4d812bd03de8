//! reqwest implementation of [`TeamClient`].

use std::time::Duration;

use crew_config::TargetConfig;
use crew_core::{SubmissionOutcome, Team, TeamRequest};
use reqwest::StatusCode;

use crate::{ClientError, TeamClient};

#[derive(Debug, Clone)]
pub struct HttpTeamClient {
    http: reqwest::Client,
    api: String,
    token: String,
}

impl HttpTeamClient {
    /// Build a client for an already-authenticated target.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(target: &TargetConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().danger_accept_invalid_certs(target.insecure);
        if let Some(secs) = target.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            api: target.api.trim_end_matches('/').to_string(),
            token: target.token.clone(),
        })
    }

    fn team_url(&self, name: &str) -> String {
        format!("{}/api/v1/teams/{}", self.api, urlencoding::encode(name))
    }
}

impl TeamClient for HttpTeamClient {
    async fn create_or_update(
        &self,
        request: &TeamRequest,
    ) -> Result<SubmissionOutcome, ClientError> {
        let url = self.team_url(request.name());
        tracing::debug!(team = request.name(), %url, "submitting team configuration");

        let resp = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        match status {
            StatusCode::CREATED | StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => return Err(ClientError::Unauthorized),
            StatusCode::FORBIDDEN => {
                return Err(ClientError::Forbidden {
                    team: request.name().to_string(),
                });
            }
            _ => {
                let body = resp.text().await.unwrap_or_default();
                return Err(ClientError::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                });
            }
        }

        let body = resp.bytes().await?;
        let team: Team = serde_json::from_slice(&body)?;
        tracing::debug!(team = %team.name, id = team.id, %status, "team submission accepted");

        Ok(if status == StatusCode::CREATED {
            SubmissionOutcome::Created(team)
        } else {
            SubmissionOutcome::Updated(team)
        })
    }
}
