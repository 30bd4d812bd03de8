use clap::{Args, Subcommand};
use crew_core::{AuthorizationBuilder, AuthorizationConfig, CoreError, Provider};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create or modify a team's authorization.
    #[command(name = "set-team")]
    SetTeam(SetTeamArgs),
}

/// Arguments for `crew set-team`.
#[derive(Clone, Debug, Args)]
pub struct SetTeamArgs {
    /// The team to create or modify.
    #[arg(short = 'n', long)]
    pub team_name: String,
    /// Force apply configuration.
    #[arg(long)]
    pub non_interactive: bool,
    #[command(flatten)]
    pub auth: AuthFlags,
}

/// Users and groups permitted to act as the team.
#[derive(Clone, Debug, Default, Args)]
#[command(next_help_heading = "Authentication")]
pub struct AuthFlags {
    /// Permit a local user.
    #[arg(long = "local-user", value_name = "USERNAME")]
    pub local_users: Vec<String>,
    /// Permit a GitHub user.
    #[arg(long = "github-user", value_name = "LOGIN")]
    pub github_users: Vec<String>,
    /// Permit every member of a GitHub organization.
    #[arg(long = "github-org", value_name = "ORG")]
    pub github_orgs: Vec<String>,
    /// Permit every member of a GitHub team.
    #[arg(long = "github-team", value_name = "ORG:TEAM")]
    pub github_teams: Vec<String>,
    /// Permit an OIDC user.
    #[arg(long = "oidc-user", value_name = "USERNAME")]
    pub oidc_users: Vec<String>,
    /// Permit an OIDC group.
    #[arg(long = "oidc-group", value_name = "GROUP")]
    pub oidc_groups: Vec<String>,
    /// Permit a user from any provider.
    #[arg(long = "user", value_name = "PROVIDER:ID")]
    pub users: Vec<String>,
    /// Permit a group from any provider.
    #[arg(long = "group", value_name = "PROVIDER:ID")]
    pub groups: Vec<String>,
    /// Ignore the lack of any users or groups.
    #[arg(long = "no-really-i-dont-want-any-auth")]
    pub no_really_i_dont_want_any_auth: bool,
}

impl AuthFlags {
    /// Qualify every flag value and collect them into one configuration.
    ///
    /// Users come out in flag order local, github, oidc, generic; groups in
    /// github org, github team, oidc, generic. Within a flag, command-line
    /// order is kept.
    pub fn to_config(&self) -> Result<AuthorizationConfig, CoreError> {
        let mut builder = AuthorizationBuilder::new();

        for name in &self.local_users {
            builder.user("--local-user", Provider::Local, name)?;
        }
        for name in &self.github_users {
            builder.user("--github-user", Provider::Github, name)?;
        }
        for name in &self.oidc_users {
            builder.user("--oidc-user", Provider::Oidc, name)?;
        }
        for raw in &self.users {
            builder.qualified_user("--user", raw)?;
        }

        for org in &self.github_orgs {
            builder.group("--github-org", Provider::Github, org)?;
        }
        for spec in &self.github_teams {
            builder.github_team("--github-team", spec)?;
        }
        for name in &self.oidc_groups {
            builder.group("--oidc-group", Provider::Oidc, name)?;
        }
        for raw in &self.groups {
            builder.qualified_group("--group", raw)?;
        }

        builder.no_auth(self.no_really_i_dont_want_any_auth);
        Ok(builder.build())
    }
}
