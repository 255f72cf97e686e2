use std::path::Path;

use anyhow::Context;
use humane_backup::Snapshot;
use humane_core::responses::RepairResponse;
use humane_hierarchy::{RepairOptions, RepairOutcome, repair_tag_relationships_with};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RepairArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `humane repair`.
///
/// Works from the backup as stored, so the counts describe the file on disk.
/// The source is never modified; the result is written only to `--output`.
pub fn handle(args: &RepairArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = RepairOptions {
        prune_dangling: args.prune_dangling(ctx.config.tracker.prune_dangling_on_repair),
    };
    let outcome = repair_tag_relationships_with(ctx.loaded.habits(), options);

    let written_to = match &args.output {
        Some(path) => {
            write_repaired(&ctx.loaded, &outcome, path)?;
            Some(path.display().to_string())
        }
        None => None,
    };

    if outcome.is_clean() {
        tracing::info!(backup = %ctx.backup_path.display(), "tag links already consistent");
    }

    output(&response(&outcome, written_to), flags.format)
}

fn write_repaired(snapshot: &Snapshot, outcome: &RepairOutcome, path: &Path) -> anyhow::Result<()> {
    let repaired = snapshot.clone().with_habits(outcome.habits.clone());
    repaired
        .backup()
        .write(path)
        .with_context(|| format!("failed to write repaired backup to '{}'", path.display()))
}

fn response(outcome: &RepairOutcome, written_to: Option<String>) -> RepairResponse {
    RepairResponse {
        parent_ids_fixed: outcome.parent_ids_fixed,
        child_ids_fixed: outcome.child_ids_fixed,
        dangling_pruned: outcome.dangling_pruned,
        changed_ids: outcome.changed_ids.clone(),
        written_to,
    }
}
