use humane_backup::{Snapshot, UNCATEGORIZED};
use humane_core::responses::HabitSummary;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HabitsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `humane habits <category>`.
pub fn handle(args: &HabitsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = summaries(&ctx.snapshot, &args.category);
    if rows.is_empty() {
        tracing::warn!(category = %args.category, "no habits in category");
    }
    output(&rows, flags.format)
}

/// Habits in `category`, sorted by name.
fn summaries(snapshot: &Snapshot, category: &str) -> Vec<HabitSummary> {
    let mut rows: Vec<HabitSummary> = snapshot
        .habits_in_category(category)
        .into_iter()
        .map(|habit| HabitSummary {
            id: habit.id.clone(),
            name: snapshot.habit_name(&habit.id).to_string(),
            habit_type: habit.habit_type,
            category: habit
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            target_per_week: habit.target_per_week,
            entry_count: snapshot.entries_for_habit(&habit.id).len(),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}
