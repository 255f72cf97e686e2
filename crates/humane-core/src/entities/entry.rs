use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dates::{DateError, EntryDate, parse_entry_date};

const fn default_value() -> f64 {
    1.0
}

/// One logged occurrence of a habit (raw or tag) on a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub habit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Stored day, kept verbatim. See [`crate::dates`] for the accepted shapes.
    pub date: String,
    #[serde(default = "default_value")]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    #[must_use]
    pub fn new(id: impl Into<String>, habit_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            habit_id: habit_id.into(),
            user_id: None,
            date: date.into(),
            value: default_value(),
            created_at: None,
            extra: Map::new(),
        }
    }

    /// Parse the stored date.
    ///
    /// # Errors
    ///
    /// Returns a [`DateError`] when the stored value is malformed or names a
    /// day that does not exist.
    pub fn parsed_date(&self) -> Result<EntryDate, DateError> {
        parse_entry_date(&self.date)
    }
}
