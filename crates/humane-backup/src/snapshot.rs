use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use humane_core::entities::{Entry, Habit, HabitsById, index_habits};
use humane_core::errors::CoreError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::BackupError;

/// Category shown for habits without one.
pub const UNCATEGORIZED: &str = "uncategorized";

/// The backup document as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Backup {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub entries: Vec<Entry>,
    /// Any other top-level keys (`version`, export metadata, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Backup {
    /// Parse a backup document.
    ///
    /// # Errors
    ///
    /// Returns [`BackupError::Parse`] for invalid JSON or mistyped fields,
    /// including an entry `date` that is not a string.
    pub fn from_json(json: &str) -> Result<Self, BackupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a backup file.
    ///
    /// # Errors
    ///
    /// Returns [`BackupError::Read`] if the file cannot be read, otherwise as
    /// [`Self::from_json`].
    pub fn load(path: &Path) -> Result<Self, BackupError> {
        let json = std::fs::read_to_string(path).map_err(|source| BackupError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let backup = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            habits = backup.habits.len(),
            entries = backup.entries.len(),
            "loaded backup"
        );
        Ok(backup)
    }

    /// Pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`BackupError::Parse`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the backup to `path`, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`BackupError::Write`] if the temporary file cannot be created,
    /// written, or moved into place.
    pub fn write(&self, path: &Path) -> Result<(), BackupError> {
        let json = self.to_json_pretty()?;
        let write_err = |source| BackupError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        file.write_all(json.as_bytes()).map_err(write_err)?;
        file.write_all(b"\n").map_err(write_err)?;
        file.persist(path).map_err(|error| write_err(error.error))?;

        tracing::info!(path = %path.display(), "wrote backup");
        Ok(())
    }
}

/// Per-category totals shown on the explorer's first screen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryStat {
    pub category: String,
    pub habits: usize,
    pub weekly_target: u32,
}

/// A loaded backup plus the id lookup every hierarchy query needs.
#[derive(Debug, Clone)]
pub struct Snapshot {
    backup: Backup,
    index: HabitsById,
}

impl Snapshot {
    #[must_use]
    pub fn new(backup: Backup) -> Self {
        let index = index_habits(backup.habits.iter().cloned());
        Self { backup, index }
    }

    /// Read and index a backup file.
    ///
    /// # Errors
    ///
    /// See [`Backup::load`].
    pub fn load(path: &Path) -> Result<Self, BackupError> {
        Backup::load(path).map(Self::new)
    }

    /// Parse and index a backup document.
    ///
    /// # Errors
    ///
    /// See [`Backup::from_json`].
    pub fn from_json(json: &str) -> Result<Self, BackupError> {
        Backup::from_json(json).map(Self::new)
    }

    #[must_use]
    pub fn habits(&self) -> &[Habit] {
        &self.backup.habits
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.backup.entries
    }

    #[must_use]
    pub const fn index(&self) -> &HabitsById {
        &self.index
    }

    #[must_use]
    pub const fn backup(&self) -> &Backup {
        &self.backup
    }

    /// Swap in a new habit list (e.g. a repair result), keeping entries and
    /// extra keys.
    #[must_use]
    pub fn with_habits(mut self, habits: Vec<Habit>) -> Self {
        self.backup.habits = habits;
        Self::new(self.backup)
    }

    #[must_use]
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.index.get(id)
    }

    /// Look up a habit that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when `id` is not in the backup.
    pub fn require_habit(&self, id: &str) -> Result<&Habit, CoreError> {
        self.habit(id).ok_or_else(|| CoreError::habit_not_found(id))
    }

    /// Habit name, or `"Unknown"` for ids not in the backup and unnamed habits.
    #[must_use]
    pub fn habit_name(&self, id: &str) -> &str {
        self.habit(id)
            .map(|habit| habit.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }

    /// Habits grouped by category, categories in name order.
    #[must_use]
    pub fn categories(&self) -> BTreeMap<&str, Vec<&Habit>> {
        let mut categories: BTreeMap<&str, Vec<&Habit>> = BTreeMap::new();
        for habit in self.habits() {
            categories
                .entry(category_of(habit))
                .or_default()
                .push(habit);
        }
        categories
    }

    /// Habits in `category`, in backup order.
    #[must_use]
    pub fn habits_in_category(&self, category: &str) -> Vec<&Habit> {
        self.habits()
            .iter()
            .filter(|habit| category_of(habit) == category)
            .collect()
    }

    /// Habit count and summed weekly target per category, in name order.
    #[must_use]
    pub fn category_stats(&self) -> Vec<CategoryStat> {
        self.categories()
            .into_iter()
            .map(|(category, habits)| CategoryStat {
                category: category.to_string(),
                habits: habits.len(),
                weekly_target: habits
                    .iter()
                    .map(|habit| u32::from(habit.target_per_week))
                    .sum(),
            })
            .collect()
    }

    /// Entries logged directly against `habit_id`, in backup order.
    #[must_use]
    pub fn entries_for_habit(&self, habit_id: &str) -> Vec<&Entry> {
        self.entries()
            .iter()
            .filter(|entry| entry.habit_id == habit_id)
            .collect()
    }
}

fn category_of(habit: &Habit) -> &str {
    habit.category.as_deref().unwrap_or(UNCATEGORIZED)
}
