use sw_config::StockwatchConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &StockwatchConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &StockwatchConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.shopify.is_configured() && has_single_underscore_key(&env_keys, "STOCKWATCH_SHOPIFY") {
        warnings.push(
            "Shopify config appears incomplete while STOCKWATCH_SHOPIFY_* env vars exist. Use double underscores (example: STOCKWATCH_SHOPIFY__ACCESS_TOKEN)."
                .to_string(),
        );
    }

    if !config.threshold.is_configured()
        && has_single_underscore_key(&env_keys, "STOCKWATCH_THRESHOLD")
    {
        warnings.push(
            "Threshold config appears incomplete while STOCKWATCH_THRESHOLD_* env vars exist. Use double underscores (example: STOCKWATCH_THRESHOLD__KEY)."
                .to_string(),
        );
    }

    warnings
}

/// `PREFIX_FOO` (one underscore) where `PREFIX__FOO` was meant.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
