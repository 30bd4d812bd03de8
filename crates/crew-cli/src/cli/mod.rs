use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::GlobalFlags;
pub use root_commands::{Commands, SetTeamArgs};

/// Top-level CLI parser for the `crew` binary.
#[derive(Debug, Parser)]
#[command(
    name = "crew",
    version,
    about = "Declare team authorization on a remote orchestration service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Target to operate on (defaults to `default_target` from config)
    #[arg(short, long, global = true)]
    pub target: Option<String>,

    /// Config file to use instead of ~/.config/crew/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            target: self.target.clone(),
            config: self.config.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
