use std::collections::HashMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::HabitType;

/// Lookup from habit id to habit, as handed to every hierarchy operation.
pub type HabitsById = HashMap<String, Habit>;

/// A trackable behavior definition: either a loggable leaf or a tag grouping
/// other habits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    /// Empty when the stored record has no name.
    #[serde(default)]
    pub name: String,
    /// Flat UI grouping, independent of the tag hierarchy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub target_per_week: u8,
    #[serde(default)]
    pub habit_type: HabitType,
    /// Habits grouped by this node. Only meaningful for tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_ids: Vec<String>,
    /// Tags listing this habit as a child (reverse index of `child_ids`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parent_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Habit {
    /// A raw habit with no category and a target of one day per week.
    #[must_use]
    pub fn raw(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            target_per_week: 1,
            habit_type: HabitType::Raw,
            child_ids: Vec::new(),
            parent_ids: Vec::new(),
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }

    /// A tag grouping `child_ids`.
    #[must_use]
    pub fn tag<I, S>(id: impl Into<String>, name: impl Into<String>, child_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            habit_type: HabitType::Tag,
            child_ids: child_ids.into_iter().map(Into::into).collect(),
            ..Self::raw(id, name)
        }
    }

    #[must_use]
    pub fn with_parents<I, S>(mut self, parent_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_ids = parent_ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub const fn with_target(mut self, target_per_week: u8) -> Self {
        self.target_per_week = target_per_week;
        self
    }

    #[must_use]
    pub fn is_tag(&self) -> bool {
        self.habit_type == HabitType::Tag
    }

    #[must_use]
    pub fn has_child(&self, id: &str) -> bool {
        self.child_ids.iter().any(|child| child == id)
    }

    #[must_use]
    pub fn has_parent(&self, id: &str) -> bool {
        self.parent_ids.iter().any(|parent| parent == id)
    }
}

/// Build a [`HabitsById`] lookup. Later duplicates of an id replace earlier ones.
pub fn index_habits<I>(habits: I) -> HabitsById
where
    I: IntoIterator<Item = Habit>,
{
    habits
        .into_iter()
        .map(|habit| (habit.id.clone(), habit))
        .collect()
}
