//! `crew set-team`: validate, preview, confirm, submit, report.

use std::io::Write;

use crew_client::{ClientError, TeamClient};
use crew_core::{
    AuthorizationConfig, CoreError, PolicyViolation, SubmissionOutcome, TeamRequest,
    render_preview,
};
use thiserror::Error;

use crate::bootstrap;
use crate::cli::{GlobalFlags, SetTeamArgs};
use crate::prompt::{ConfirmError, Confirmer, TerminalConfirmer};

pub const NO_AUTH_FLAG: &str = "--no-really-i-dont-want-any-auth";
const CONFIRM_PROMPT: &str = "apply configuration?";

#[derive(Debug, Error)]
pub enum SetTeamError {
    #[error(transparent)]
    InvalidFlags(#[from] CoreError),

    /// The configuration failed the safety policy. Never reaches the prompt.
    #[error(transparent)]
    PolicyViolation(#[from] PolicyViolation),

    #[error("bailing out")]
    Declined,

    #[error("could not confirm: {0}")]
    Prompt(#[from] ConfirmError),

    #[error(transparent)]
    Submit(#[from] ClientError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// One `set-team` invocation, owned for its duration.
#[derive(Debug)]
pub struct SetTeam<'a> {
    pub target_name: &'a str,
    pub team_name: &'a str,
    pub auth: AuthorizationConfig,
    pub skip_interactive: bool,
}

pub async fn handle(args: &SetTeamArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let auth = args.auth.to_config().map_err(SetTeamError::from)?;
    let session = bootstrap::connect(flags)?;

    let invocation = SetTeam {
        target_name: &session.target_name,
        team_name: &args.team_name,
        auth,
        skip_interactive: args.non_interactive,
    };

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();
    let outcome = execute(
        &invocation,
        &TerminalConfirmer,
        &session.client,
        &mut out,
        &mut err,
    )
    .await?;

    tracing::info!(
        team = %outcome.team().name,
        id = outcome.team().id,
        created = outcome.created(),
        "team configuration applied"
    );
    Ok(())
}

/// Run the command against injected prompt, client, and output streams.
///
/// Informational output goes to `out`; warnings and remediation go to `err`.
/// The client is called at most once, and only after the policy accepted the
/// configuration and consent was given.
pub async fn execute<C, T, O, E>(
    invocation: &SetTeam<'_>,
    confirmer: &C,
    client: &T,
    out: &mut O,
    err: &mut E,
) -> Result<SubmissionOutcome, SetTeamError>
where
    C: Confirmer,
    T: TeamClient,
    O: Write,
    E: Write,
{
    let verdict = match crew_core::validate(&invocation.auth) {
        Ok(verdict) => verdict,
        Err(violation) => {
            write_remediation(err, invocation.target_name, invocation.team_name)?;
            return Err(violation.into());
        }
    };

    writeln!(out, "{}", render_preview(invocation.team_name, &invocation.auth))?;
    out.flush()?;

    if let Some(warning) = verdict.warning() {
        writeln!(err)?;
        writeln!(err, "WARNING:")?;
        writeln!(err, "{warning}")?;
    }

    if !invocation.skip_interactive {
        writeln!(err)?;
        err.flush()?;
    }
    if !confirm(confirmer, invocation.skip_interactive)? {
        return Err(SetTeamError::Declined);
    }

    let request = TeamRequest::new(invocation.team_name, &invocation.auth);
    let outcome = client.create_or_update(&request).await?;

    writeln!(out, "{}", outcome.report())?;
    Ok(outcome)
}

/// Gate a mutating change on operator consent.
///
/// Skipping returns `true` without rendering a prompt. Otherwise the answer
/// defaults to yes; a dismissed or failed prompt is an error, not a "no".
pub fn confirm<C: Confirmer>(
    confirmer: &C,
    skip_interactive: bool,
) -> Result<bool, ConfirmError> {
    if skip_interactive {
        return Ok(true);
    }
    confirmer.ask(CONFIRM_PROMPT, true)
}

fn write_remediation<E: Write>(
    err: &mut E,
    target_name: &str,
    team_name: &str,
) -> std::io::Result<()> {
    writeln!(err, "no auth methods configured! to continue, run:")?;
    writeln!(err)?;
    writeln!(err, "    crew -t {target_name} set-team -n {team_name} {NO_AUTH_FLAG}")?;
    writeln!(err)?;
    writeln!(err, "this will leave the team open to anyone to mess with!")?;
    err.flush()
}
