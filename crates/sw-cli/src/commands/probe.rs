use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProbeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `stockwatch probe`.
pub async fn handle(args: &ProbeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = ctx.reconciler.probe(args.limit).await;
    output(&page, flags.format)
}
