//! CLI response types returned as JSON by `humane` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `humane tag status`, `humane tag week`, `humane check-edge`, and
//! `humane repair`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::HabitType;

/// Compact habit row used by list-style responses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HabitSummary {
    pub id: String,
    pub name: String,
    pub habit_type: HabitType,
    pub category: String,
    pub target_per_week: u8,
    /// Entries logged directly against this habit.
    pub entry_count: usize,
}

/// Response from `humane tag status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TagStatusResponse {
    pub habit_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub completed: bool,
    pub descendants: Vec<String>,
}

/// Response from `humane tag week`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TagWeekResponse {
    pub habit_id: String,
    pub name: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub days_with_activity: usize,
    pub target_per_week: u8,
    pub target_met: bool,
}

/// Response from `humane check-edge`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EdgeCheckResponse {
    pub parent_id: String,
    pub child_id: String,
    pub would_create_cycle: bool,
}

/// Response from `humane repair`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RepairResponse {
    pub parent_ids_fixed: usize,
    pub child_ids_fixed: usize,
    pub dangling_pruned: usize,
    pub changed_ids: Vec<String>,
    /// Where the repaired backup was written, if anywhere.
    pub written_to: Option<String>,
}
