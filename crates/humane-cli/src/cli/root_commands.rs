use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::TagCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Habit count and weekly target per category.
    Categories,
    /// Habits in a category.
    Habits(HabitsArgs),
    /// Entries logged against a habit, newest first.
    Entries(EntriesArgs),
    /// Tag progress.
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },
    /// Check whether linking parent -> child would create a cycle.
    CheckEdge(CheckEdgeArgs),
    /// Make tag/child links two-sided.
    Repair(RepairArgs),
    /// Hierarchy health report.
    Graph,
    /// Print the JSON Schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HabitsArgs {
    pub category: String,
}

#[derive(Clone, Debug, Args)]
pub struct EntriesArgs {
    pub habit_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CheckEdgeArgs {
    pub parent_id: String,
    pub child_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct RepairArgs {
    /// Write the repaired backup here.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Drop references to habits missing from the backup.
    #[arg(long, conflicts_with = "no_prune")]
    pub prune: bool,
    /// Keep references to missing habits.
    #[arg(long)]
    pub no_prune: bool,
}

impl RepairArgs {
    /// The prune setting after applying flags over the configured default.
    #[must_use]
    pub const fn prune_dangling(&self, configured: bool) -> bool {
        if self.prune {
            true
        } else if self.no_prune {
            false
        } else {
            configured
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Habit,
    Entry,
    Backup,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: SchemaType,
}
