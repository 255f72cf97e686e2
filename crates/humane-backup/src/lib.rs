//! # humane-backup
//!
//! The tracker exports its whole local database as a single JSON document:
//!
//! ```json
//! { "version": 1, "habits": [ ... ], "entries": [ ... ] }
//! ```
//!
//! This crate loads that document into a [`Snapshot`], answers the browsing
//! queries of the backup explorer (categories, habits per category, entries
//! per habit), and writes a possibly repaired copy back out. Top-level keys
//! other than `habits` and `entries` are carried through untouched.

mod error;
mod snapshot;

pub use error::BackupError;
pub use snapshot::{Backup, CategoryStat, Snapshot, UNCATEGORIZED};
