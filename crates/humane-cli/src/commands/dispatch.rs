use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Categories => commands::categories::handle(ctx, flags),
        Commands::Habits(args) => commands::habits::handle(&args, ctx, flags),
        Commands::Entries(args) => commands::entries::handle(&args, ctx, flags),
        Commands::Tag { action } => commands::tag::handle(&action, ctx, flags),
        Commands::CheckEdge(args) => commands::check_edge::handle(&args, ctx, flags),
        Commands::Repair(args) => commands::repair::handle(&args, ctx, flags),
        Commands::Graph => commands::graph::handle(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
