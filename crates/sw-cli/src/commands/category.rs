use anyhow::bail;
use sw_core::CategoryRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CategoryArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `stockwatch category <slug>`.
pub async fn handle(args: &CategoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.reconciler.category(&args.slug).await {
        Ok(page) => output(&page, flags.format),
        Err(error) if error.is_not_found() => {
            bail!(
                "unknown category '{}' (known: {})",
                args.slug,
                known_slugs(ctx.reconciler.registry())
            )
        }
        Err(error) => Err(error.into()),
    }
}

fn known_slugs(registry: &CategoryRegistry) -> String {
    registry
        .iter()
        .map(|category| category.slug.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use sw_core::CategoryRegistry;

    use super::known_slugs;

    #[test]
    fn known_slugs_follow_registry_order() {
        assert_eq!(
            known_slugs(&CategoryRegistry::builtin()),
            "simple, 2-button, 7-button, quilt"
        );
    }
}
