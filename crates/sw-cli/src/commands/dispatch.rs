use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Urgent => commands::urgent::handle(ctx, flags).await,
        Commands::Category(args) => commands::category::handle(&args, ctx, flags).await,
        Commands::Probe(args) => commands::probe::handle(&args, ctx, flags).await,
        Commands::Serve(args) => commands::serve::handle(&args, ctx).await,
        Commands::Categories => commands::categories::handle(&ctx.config, flags),
    }
}
