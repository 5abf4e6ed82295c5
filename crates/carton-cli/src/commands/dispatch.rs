use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Tree(args) => commands::tree::handle(&args, ctx, flags),
        Commands::Attributes => commands::attributes::handle(flags),
        Commands::Path(args) => commands::path::handle(&args, ctx, flags),
        Commands::Plan(args) => commands::plan::handle(&args, ctx, flags),
        Commands::Check(args) => commands::check::handle(&args, ctx, flags),
    }
}
