use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Build(args) => commands::build::handle(&args, ctx, flags),
        Commands::List => commands::list::handle(ctx, flags),
        Commands::Render(args) => commands::render::handle(&args, ctx),
        Commands::Schema => commands::schema::handle(flags),
    }
}
