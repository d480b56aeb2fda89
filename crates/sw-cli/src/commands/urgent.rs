use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `stockwatch urgent`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = ctx.reconciler.urgent().await?;
    output(&page, flags.format)
}
