//! Entity structs for Humane domain objects.
//!
//! Each entity maps to one record array in the tracker's backup export.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation. Keys are `camelCase`, and fields this crate does not
//! model are kept in `extra` so a rewritten backup loses nothing.

mod entry;
mod habit;

pub use entry::Entry;
pub use habit::{Habit, HabitsById, index_habits};
