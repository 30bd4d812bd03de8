//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// Neither `--target` nor `default_target` named a target.
    #[error("no target specified: pass --target or set default_target")]
    NoTarget,

    /// The requested target is not present in the configuration.
    #[error("unknown target '{name}'")]
    UnknownTarget { name: String },

    /// A target exists but lacks required fields.
    #[error("target '{name}' is not configured (missing {missing})")]
    NotConfigured { name: String, missing: &'static str },
}

