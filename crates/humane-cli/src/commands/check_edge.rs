use humane_core::responses::EdgeCheckResponse;
use humane_hierarchy::would_create_cycle;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckEdgeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `humane check-edge <parent> <child>`.
pub fn handle(args: &CheckEdgeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&check(args, ctx), flags.format)
}

fn check(args: &CheckEdgeArgs, ctx: &AppContext) -> EdgeCheckResponse {
    let index = ctx.snapshot.index();
    for id in [&args.parent_id, &args.child_id] {
        if !index.contains_key(id.as_str()) {
            tracing::warn!(habit_id = %id, "habit not in backup");
        }
    }

    EdgeCheckResponse {
        parent_id: args.parent_id.clone(),
        child_id: args.child_id.clone(),
        would_create_cycle: would_create_cycle(&args.parent_id, &args.child_id, index),
    }
}
