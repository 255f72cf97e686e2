//! Backup file location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BackupConfig {
    /// Path to the tracker's JSON backup export.
    #[serde(default)]
    pub path: String,
}

impl BackupConfig {
    /// Whether a backup path is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }

    /// The configured path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no path is set.
    pub fn require_path(&self) -> Result<PathBuf, ConfigError> {
        if self.is_configured() {
            Ok(PathBuf::from(&self.path))
        } else {
            Err(ConfigError::NotConfigured {
                section: "backup".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_not_configured() {
        let config = BackupConfig::default();
        assert!(!config.is_configured());
        assert!(matches!(
            config.require_path(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn set_path_is_returned() {
        let config = BackupConfig {
            path: "backup.json".into(),
        };
        assert_eq!(config.require_path().unwrap(), PathBuf::from("backup.json"));
    }
}
