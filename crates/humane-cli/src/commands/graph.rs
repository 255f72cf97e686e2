use humane_hierarchy::graph::HabitGraph;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `humane graph`.
///
/// Reports on the backup as stored, so one-sided links are still visible.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let analysis = HabitGraph::from_habits(ctx.loaded.habits()).analyze();
    if analysis.has_cycles {
        tracing::warn!("habit hierarchy contains a cycle");
    }
    output(&analysis, flags.format)
}

#[cfg(test)]
mod tests {
    use humane_hierarchy::graph::HabitGraph;

    use crate::commands::fixtures;

    #[test]
    fn report_reads_stored_links() {
        let ctx = fixtures::context();
        let stored = HabitGraph::from_habits(ctx.loaded.habits()).analyze();
        let repaired = HabitGraph::from_habits(ctx.snapshot.habits()).analyze();

        assert_eq!(stored.one_sided_links.len(), 2);
        assert!(repaired.one_sided_links.is_empty());
        assert_eq!(stored.dangling.len(), 1);
    }
}
