//! Resolve a tag down to the raw habits it contains.

use std::collections::HashSet;

use humane_core::entities::{Habit, HabitsById};
use humane_core::enums::HabitType;

/// Raw habits reachable from `tag` through `childIds`, each listed once.
///
/// Nested tags are expanded, never returned. Ids missing from `habits` are
/// skipped. The visited set makes diamonds collapse to a single result and
/// keeps a cyclic (corrupt) graph finite; an explicit stack keeps deep
/// nesting off the call stack.
///
/// Results come out in depth-first `childIds` order, but callers should not
/// rely on it.
#[must_use]
pub fn descendant_raw_habits<'a>(tag: &Habit, habits: &'a HabitsById) -> Vec<&'a Habit> {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(tag.id.as_str());

    let mut stack: Vec<&str> = tag.child_ids.iter().rev().map(String::as_str).collect();
    let mut raw = Vec::new();

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }

        let Some(habit) = habits.get(id) else {
            tracing::debug!(tag_id = %tag.id, missing_id = id, "skipping dangling child id");
            continue;
        };

        match habit.habit_type {
            HabitType::Raw => raw.push(habit),
            HabitType::Tag => stack.extend(habit.child_ids.iter().rev().map(String::as_str)),
        }
    }

    raw
}
