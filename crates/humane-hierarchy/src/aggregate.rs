//! Entries that count toward a tag.

use std::collections::HashSet;

use humane_core::entities::{Entry, Habit, HabitsById};

use crate::descendants::descendant_raw_habits;

/// Entries logged directly against `tag` plus every entry on its descendant
/// raw habits, in `entries` order.
#[must_use]
pub fn tag_entries<'e>(tag: &Habit, habits: &HabitsById, entries: &'e [Entry]) -> Vec<&'e Entry> {
    let mut counted: HashSet<&str> = descendant_raw_habits(tag, habits)
        .into_iter()
        .map(|habit| habit.id.as_str())
        .collect();
    counted.insert(tag.id.as_str());

    entries
        .iter()
        .filter(|entry| counted.contains(entry.habit_id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use humane_core::entities::Entry;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures;

    fn entry_ids(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|entry| entry.id.clone()).collect()
    }

    #[test]
    fn merges_own_and_descendant_entries() {
        let habits = fixtures::nested();
        let entries = vec![
            Entry::new("e1", "move", "2025-11-24"),
            Entry::new("e2", "yoga", "2025-11-24"),
            Entry::new("e3", "swim", "2025-11-25"),
            Entry::new("e4", "read", "2025-11-25"),
        ];

        let found = tag_entries(&habits["move"], &habits, &entries);
        assert_eq!(entry_ids(&found), vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn intermediate_tag_entries_are_not_inherited() {
        // Entries logged against a nested tag belong to that tag, not its ancestors.
        let habits = fixtures::nested();
        let entries = vec![Entry::new("e1", "cardio", "2025-11-24")];

        assert!(tag_entries(&habits["move"], &habits, &entries).is_empty());
        assert_eq!(
            entry_ids(&tag_entries(&habits["cardio"], &habits, &entries)),
            vec!["e1"]
        );
    }

    #[test]
    fn raw_habit_sees_only_its_own_entries() {
        let habits = fixtures::nested();
        let entries = vec![
            Entry::new("e1", "walk", "2025-11-24"),
            Entry::new("e2", "swim", "2025-11-24"),
        ];
        assert_eq!(
            entry_ids(&tag_entries(&habits["walk"], &habits, &entries)),
            vec!["e1"]
        );
    }
}
