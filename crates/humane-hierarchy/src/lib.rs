//! # humane-hierarchy
//!
//! Tag hierarchy invariants and completion aggregation for Humane habits.
//!
//! Habits form a DAG through `childIds` (on tags) and its reverse index
//! `parentIds`. This crate provides:
//! - Cycle checks to run before committing a new tag/child edge
//! - Additive repair of the bidirectional `childIds`/`parentIds` links
//! - Descendant resolution from a tag down to its raw habits
//! - Day-level completion and week-level distinct-day counts for a tag
//! - A diagnostic report over the whole habit graph
//!
//! Every function is synchronous and pure over a caller-supplied snapshot.
//! Nothing here performs I/O or keeps state between calls. Callers that check
//! [`would_create_cycle`] and then persist the edge must do both inside one
//! storage transaction.

mod aggregate;
mod completion;
mod cycle;
mod descendants;
pub mod graph;
mod repair;
mod weekly;

pub use aggregate::tag_entries;
pub use completion::is_tag_completed_for_day;
pub use cycle::would_create_cycle;
pub use descendants::descendant_raw_habits;
pub use repair::{RepairOptions, RepairOutcome, repair_tag_relationships, repair_tag_relationships_with};
pub use weekly::tag_weekly_count;
