//! Reachability check run before a tag gains a new child.

use std::collections::HashMap;

use humane_core::entities::HabitsById;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnPath,
    Done,
}

enum Step<'a> {
    Enter(&'a str),
    Leave(&'a str),
}

/// Whether making `child_id` a child of `parent_id` would close a cycle.
///
/// Walks existing `childIds` edges depth-first from `child_id`; the edge is a
/// cycle if `parent_id` is reachable. A habit is always its own cycle.
///
/// If the walk runs into a loop that already exists below `child_id`, the
/// answer is `true`: the subgraph is corrupt and should be repaired before it
/// grows. Ids missing from `habits` are skipped. A node reachable along two
/// paths (a diamond) is not a cycle.
#[must_use]
pub fn would_create_cycle(parent_id: &str, child_id: &str, habits: &HabitsById) -> bool {
    if parent_id == child_id {
        return true;
    }

    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut stack = vec![Step::Enter(child_id)];

    while let Some(step) = stack.pop() {
        let id = match step {
            Step::Leave(id) => {
                marks.insert(id, Mark::Done);
                continue;
            }
            Step::Enter(id) => id,
        };

        if id == parent_id {
            tracing::debug!(parent_id, child_id, "edge would close a cycle");
            return true;
        }

        match marks.get(id) {
            Some(Mark::Done) => continue,
            Some(Mark::OnPath) => {
                tracing::warn!(
                    habit_id = id,
                    child_id,
                    "existing habit graph already contains a cycle; refusing edge"
                );
                return true;
            }
            None => {}
        }

        marks.insert(id, Mark::OnPath);
        stack.push(Step::Leave(id));

        if let Some(habit) = habits.get(id) {
            for child in habit.child_ids.iter().rev() {
                stack.push(Step::Enter(child));
            }
        }
    }

    false
}
