use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `humane categories`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.snapshot.category_stats(), flags.format)
}
