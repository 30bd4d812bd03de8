//! # crew-config
//!
//! Layered configuration loading for crew using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CREW_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`, otherwise the user-level
//!    `~/.config/crew/config.toml`
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CREW_DEFAULT_TARGET` -> `default_target` and
//! `CREW_TARGETS__CI__TOKEN` -> `targets.ci.token`.
//!
//! # Usage
//!
//! ```no_run
//! use crew_config::CrewConfig;
//!
//! let config = CrewConfig::load(None).expect("config");
//! let (name, target) = config.resolve_target(Some("ci")).expect("target");
//! println!("{name}: {}", target.api);
//! ```

mod error;
mod target;

pub use error::ConfigError;
pub use target::TargetConfig;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CrewConfig {
    /// Target used when `--target` is not given.
    #[serde(default)]
    pub default_target: Option<String>,

    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfig>,
}

impl CrewConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`CrewConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(config_path).extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory, then [`CrewConfig::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(config_path)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer extra providers.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match config_path {
            // An explicit path must exist; figment reports it if it doesn't.
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                if let Some(global_path) = Self::global_config_path()
                    && global_path.exists()
                {
                    figment = figment.merge(Toml::file(global_path));
                }
            }
        }

        figment.merge(Env::prefixed("CREW_").split("__"))
    }

    /// Pick the target named on the command line, falling back to
    /// `default_target`, and check it has everything needed to connect.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoTarget`, `ConfigError::UnknownTarget`, or
    /// `ConfigError::NotConfigured`.
    pub fn resolve_target<'a>(
        &'a self,
        requested: Option<&'a str>,
    ) -> Result<(&'a str, &'a TargetConfig), ConfigError> {
        let name = requested
            .or(self.default_target.as_deref())
            .ok_or(ConfigError::NoTarget)?;
        let target = self
            .targets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTarget {
                name: name.to_string(),
            })?;
        target.validate(name)?;
        Ok((name, target))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("crew").join("config.toml"))
    }
}
