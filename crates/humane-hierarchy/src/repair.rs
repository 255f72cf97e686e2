//! Restore missing `childIds` ↔ `parentIds` links.
//!
//! The two lists are stored on different records and drift whenever one side
//! is written without the other. Repair is additive: every link named on
//! either side is made to appear on both. Run it after every full reload of
//! the habit set and persist the result yourself.

use std::collections::{HashMap, HashSet};

use humane_core::entities::Habit;

/// Knobs for [`repair_tag_relationships_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairOptions {
    /// Also drop `childIds`/`parentIds` entries naming habits absent from the
    /// snapshot (e.g. left behind by a deleted tag).
    pub prune_dangling: bool,
}

/// Proposed repaired habit list plus what changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairOutcome {
    /// Every habit, in input order, repaired where needed.
    pub habits: Vec<Habit>,
    /// Parent ids added to some habit's `parentIds`.
    pub parent_ids_fixed: usize,
    /// Child ids added to some tag's `childIds`.
    pub child_ids_fixed: usize,
    /// Dangling references removed (only with `prune_dangling`).
    pub dangling_pruned: usize,
    /// Ids of habits that differ from their input, in input order.
    pub changed_ids: Vec<String>,
}

impl RepairOutcome {
    #[must_use]
    pub const fn total_fixes(&self) -> usize {
        self.parent_ids_fixed + self.child_ids_fixed + self.dangling_pruned
    }

    /// Whether the input already satisfied every link invariant.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.total_fixes() == 0
    }

    /// Habits that need to be written back.
    pub fn changed_habits(&self) -> impl Iterator<Item = &Habit> {
        self.habits
            .iter()
            .filter(|habit| self.changed_ids.contains(&habit.id))
    }
}

/// Additive-only repair: see [`repair_tag_relationships_with`].
#[must_use]
pub fn repair_tag_relationships(habits: &[Habit]) -> RepairOutcome {
    repair_tag_relationships_with(habits, RepairOptions::default())
}

/// Make every tag/child link appear on both sides.
///
/// - A tag listing `C` in `childIds` puts the tag in `C.parentIds`.
/// - A habit listing `T` in `parentIds` puts the habit in `T.childIds`, if `T`
///   is a tag. Raw habits never gain children.
///
/// Existing entries keep their order; added ids are appended in snapshot
/// order. Nothing is ever removed unless `options.prune_dangling` is set.
/// Running the repair on its own output finds nothing to fix.
#[must_use]
pub fn repair_tag_relationships_with(habits: &[Habit], options: RepairOptions) -> RepairOutcome {
    let mut expected_parents: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut expected_children: HashMap<&str, Vec<&str>> = HashMap::new();

    for habit in habits {
        if habit.is_tag() {
            for child_id in &habit.child_ids {
                expected_parents
                    .entry(child_id.as_str())
                    .or_default()
                    .push(habit.id.as_str());
            }
        }
        for parent_id in &habit.parent_ids {
            expected_children
                .entry(parent_id.as_str())
                .or_default()
                .push(habit.id.as_str());
        }
    }

    let known: HashSet<&str> = habits.iter().map(|habit| habit.id.as_str()).collect();
    let mut outcome = RepairOutcome {
        habits: Vec::with_capacity(habits.len()),
        ..RepairOutcome::default()
    };

    for habit in habits {
        let mut repaired = habit.clone();

        let added_parents = append_missing(
            &mut repaired.parent_ids,
            expected_parents.get(habit.id.as_str()),
        );
        let added_children = if repaired.is_tag() {
            append_missing(
                &mut repaired.child_ids,
                expected_children.get(habit.id.as_str()),
            )
        } else {
            0
        };

        let pruned = if options.prune_dangling {
            prune_unknown(&mut repaired.parent_ids, &known)
                + prune_unknown(&mut repaired.child_ids, &known)
        } else {
            0
        };

        if added_parents + added_children + pruned > 0 {
            tracing::debug!(
                habit_id = %habit.id,
                added_parents,
                added_children,
                pruned,
                "repaired habit links"
            );
            outcome.changed_ids.push(habit.id.clone());
        }

        outcome.parent_ids_fixed += added_parents;
        outcome.child_ids_fixed += added_children;
        outcome.dangling_pruned += pruned;
        outcome.habits.push(repaired);
    }

    if !outcome.is_clean() {
        tracing::info!(
            parent_ids_fixed = outcome.parent_ids_fixed,
            child_ids_fixed = outcome.child_ids_fixed,
            dangling_pruned = outcome.dangling_pruned,
            habits_changed = outcome.changed_ids.len(),
            "repaired tag relationships"
        );
    }

    outcome
}

fn append_missing(ids: &mut Vec<String>, expected: Option<&Vec<&str>>) -> usize {
    let Some(expected) = expected else {
        return 0;
    };

    let mut added = 0;
    for id in expected {
        if !ids.iter().any(|existing| existing == id) {
            ids.push((*id).to_string());
            added += 1;
        }
    }
    added
}

fn prune_unknown(ids: &mut Vec<String>, known: &HashSet<&str>) -> usize {
    let before = ids.len();
    ids.retain(|id| known.contains(id.as_str()));
    before - ids.len()
}

#[cfg(test)]
mod tests {
    use humane_core::entities::Habit;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn find<'a>(habits: &'a [Habit], id: &str) -> &'a Habit {
        habits.iter().find(|habit| habit.id == id).unwrap()
    }

    #[test]
    fn missing_parent_link_is_restored() {
        let habits = vec![Habit::tag("t", "Tag", ["c"]), Habit::raw("c", "Child")];

        let outcome = repair_tag_relationships(&habits);

        assert_eq!(find(&outcome.habits, "c").parent_ids, vec!["t"]);
        assert_eq!(outcome.parent_ids_fixed, 1);
        assert_eq!(outcome.child_ids_fixed, 0);
        assert_eq!(outcome.changed_ids, vec!["c"]);
    }

    #[test]
    fn missing_child_link_is_restored() {
        let habits = vec![
            Habit::tag("t", "Tag", Vec::<String>::new()),
            Habit::raw("c", "Child").with_parents(["t"]),
        ];

        let outcome = repair_tag_relationships(&habits);

        assert_eq!(find(&outcome.habits, "t").child_ids, vec!["c"]);
        assert_eq!(outcome.parent_ids_fixed, 0);
        assert_eq!(outcome.child_ids_fixed, 1);
    }

    #[test]
    fn raw_habits_never_gain_children() {
        let habits = vec![
            Habit::raw("r", "Raw"),
            Habit::raw("c", "Child").with_parents(["r"]),
        ];

        let outcome = repair_tag_relationships(&habits);

        assert!(find(&outcome.habits, "r").child_ids.is_empty());
        assert!(outcome.is_clean());
    }

    #[test]
    fn added_ids_are_appended_after_existing_ones() {
        let habits = vec![
            Habit::tag("t1", "T1", ["c"]),
            Habit::tag("t2", "T2", ["c"]),
            Habit::raw("c", "Child").with_parents(["t2", "t0"]),
            Habit::tag("t0", "T0", Vec::<String>::new()),
        ];

        let outcome = repair_tag_relationships(&habits);

        assert_eq!(find(&outcome.habits, "c").parent_ids, vec!["t2", "t0", "t1"]);
        assert_eq!(find(&outcome.habits, "t0").child_ids, vec!["c"]);
        assert_eq!(outcome.parent_ids_fixed, 1);
        assert_eq!(outcome.child_ids_fixed, 1);
    }

    #[test]
    fn consistent_snapshot_is_untouched() {
        let habits = vec![
            Habit::tag("t", "Tag", ["c"]),
            Habit::raw("c", "Child").with_parents(["t"]),
        ];

        let outcome = repair_tag_relationships(&habits);

        assert!(outcome.is_clean());
        assert!(outcome.changed_ids.is_empty());
        assert_eq!(outcome.habits, habits);
    }

    #[test]
    fn stale_references_survive_additive_repair() {
        let habits = vec![
            Habit::raw("c", "Child").with_parents(["deleted-tag"]),
            Habit::tag("t", "Tag", ["deleted-child", "c"]),
        ];

        let outcome = repair_tag_relationships(&habits);

        assert_eq!(find(&outcome.habits, "c").parent_ids, vec!["deleted-tag", "t"]);
        assert_eq!(find(&outcome.habits, "t").child_ids, vec!["deleted-child", "c"]);
        assert_eq!(outcome.dangling_pruned, 0);
    }

    #[test]
    fn pruning_drops_only_dangling_references() {
        let habits = vec![
            Habit::raw("c", "Child").with_parents(["deleted-tag"]),
            Habit::tag("t", "Tag", ["deleted-child", "c"]),
        ];

        let outcome = repair_tag_relationships_with(
            &habits,
            RepairOptions {
                prune_dangling: true,
            },
        );

        assert_eq!(find(&outcome.habits, "c").parent_ids, vec!["t"]);
        assert_eq!(find(&outcome.habits, "t").child_ids, vec!["c"]);
        assert_eq!(outcome.parent_ids_fixed, 1);
        assert_eq!(outcome.dangling_pruned, 2);
        assert_eq!(outcome.changed_ids, vec!["c", "t"]);
        assert_eq!(outcome.changed_habits().count(), 2);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn second_pass_finds_nothing(#[case] prune_dangling: bool) {
        let habits = vec![
            Habit::tag("a", "A", ["b", "ghost"]),
            Habit::tag("b", "B", ["x"]).with_parents(["z"]),
            Habit::raw("x", "X"),
            Habit::raw("y", "Y").with_parents(["b", "a"]),
            Habit::tag("z", "Z", Vec::<String>::new()),
        ];
        let options = RepairOptions { prune_dangling };

        let first = repair_tag_relationships_with(&habits, options);
        assert!(!first.is_clean());

        let second = repair_tag_relationships_with(&first.habits, options);
        assert!(second.is_clean());
        assert_eq!(second.habits, first.habits);
    }

    #[test]
    fn existing_links_are_never_removed() {
        let habits = vec![
            Habit::tag("a", "A", ["b"]),
            Habit::tag("b", "B", ["x"]),
            Habit::raw("x", "X").with_parents(["b"]),
        ];

        let outcome = repair_tag_relationships(&habits);

        for before in &habits {
            let after = find(&outcome.habits, &before.id);
            assert!(before.child_ids.iter().all(|id| after.has_child(id)));
            assert!(before.parent_ids.iter().all(|id| after.has_parent(id)));
        }
        assert_eq!(find(&outcome.habits, "b").parent_ids, vec!["a"]);
    }
}
