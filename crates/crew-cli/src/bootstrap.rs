use anyhow::Context;
use crew_client::HttpTeamClient;
use crew_config::CrewConfig;

use crate::cli::GlobalFlags;

/// A resolved target and a client bound to it.
pub struct Session {
    pub target_name: String,
    pub client: HttpTeamClient,
}

/// Load configuration, resolve the target, and build its client.
pub fn connect(flags: &GlobalFlags) -> anyhow::Result<Session> {
    let config = CrewConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load crew configuration")?;
    let (name, target) = config.resolve_target(flags.target.as_deref())?;
    tracing::debug!(target_name = name, api = %target.api, "resolved target");

    let client = HttpTeamClient::new(target)
        .with_context(|| format!("failed to build HTTP client for target '{name}'"))?;

    Ok(Session {
        target_name: name.to_string(),
        client,
    })
}
