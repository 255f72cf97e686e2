//! # humane-config
//!
//! Layered configuration loading for Humane using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HUMANE_*` prefix, `__` as separator)
//! 2. Project-level `.humane/config.toml`
//! 3. User-level `~/.config/humane/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HUMANE_BACKUP__PATH` -> `backup.path`,
//! `HUMANE_TRACKER__WEEK_STARTS_ON` -> `tracker.week_starts_on`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use humane_config::HumaneConfig;
//!
//! let config = HumaneConfig::load_with_dotenv().expect("config");
//!
//! if config.backup.is_configured() {
//!     println!("Backup: {}", config.backup.path);
//! }
//! ```

mod backup;
mod error;
mod general;
mod tracker;

pub use backup::BackupConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use tracker::TrackerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HumaneConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HumaneConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_global(Self::global_config_path())
    }

    /// The provider chain with an explicit user-level config file, or none.
    #[must_use]
    pub fn figment_with_global(global_path: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".humane/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HUMANE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("humane").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use humane_core::enums::WeekStart;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = HumaneConfig::default();
        assert!(!config.backup.is_configured());
        assert_eq!(config.tracker.week_starts_on, WeekStart::Monday);
        assert_eq!(config.general.default_format, "json");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            let config: HumaneConfig = HumaneConfig::figment_with_global(None).extract()?;
            assert!(!config.backup.is_configured());
            assert!(config.tracker.prune_dangling_on_repair);
            Ok(())
        });
    }

    #[test]
    fn layers_global_and_project_files() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("global.toml", "[tracker]\nweek_starts_on = \"sunday\"\n")?;
            jail.create_dir(".humane")?;
            jail.create_file(".humane/config.toml", "[backup]\npath = \"local.json\"\n")?;

            let config: HumaneConfig =
                HumaneConfig::figment_with_global(Some("global.toml".into())).extract()?;
            assert_eq!(config.tracker.week_starts_on, WeekStart::Sunday);
            assert_eq!(config.backup.path, "local.json");
            Ok(())
        });
    }
}
