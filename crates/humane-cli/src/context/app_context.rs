use std::path::{Path, PathBuf};

use anyhow::Context;
use humane_backup::Snapshot;
use humane_config::HumaneConfig;
use humane_hierarchy::repair_tag_relationships;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: HumaneConfig,
    /// The backup with tag links made two-sided; every query reads this.
    pub snapshot: Snapshot,
    /// The backup exactly as stored on disk.
    pub loaded: Snapshot,
    pub backup_path: PathBuf,
}

impl AppContext {
    /// Load the backup named by `--file`, or by `backup.path` when absent.
    pub fn init(file: Option<&Path>, config: HumaneConfig) -> anyhow::Result<Self> {
        let backup_path = match file {
            Some(path) => path.to_path_buf(),
            None => config
                .backup
                .require_path()
                .context("no backup file given; pass --file or set HUMANE_BACKUP__PATH")?,
        };

        let loaded = Snapshot::load(&backup_path)
            .with_context(|| format!("failed to open backup '{}'", backup_path.display()))?;

        Ok(Self::from_loaded(loaded, config, backup_path))
    }

    fn from_loaded(loaded: Snapshot, config: HumaneConfig, backup_path: PathBuf) -> Self {
        let outcome = repair_tag_relationships(loaded.habits());
        if !outcome.is_clean() {
            tracing::info!(
                parent_ids_fixed = outcome.parent_ids_fixed,
                child_ids_fixed = outcome.child_ids_fixed,
                "answering queries from repaired tag links"
            );
        }
        let snapshot = loaded.clone().with_habits(outcome.habits);

        Self {
            config,
            snapshot,
            loaded,
            backup_path,
        }
    }

    /// Build a context around an already-loaded snapshot.
    #[cfg(test)]
    pub fn for_tests(loaded: Snapshot, config: HumaneConfig) -> Self {
        Self::from_loaded(loaded, config, PathBuf::from("backup.json"))
    }
}
