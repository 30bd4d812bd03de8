#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod prompt;

use commands::set_team::SetTeamError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report(&error);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    commands::dispatch::dispatch(cli.command, &flags).await
}

fn report(error: &anyhow::Error) {
    match error.downcast_ref::<SetTeamError>() {
        // The remediation text has already been written to stderr.
        Some(SetTeamError::PolicyViolation(_)) => {}
        Some(SetTeamError::Declined) => eprintln!("{error}"),
        _ => eprintln!("crew error: {error:#}"),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CREW_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
