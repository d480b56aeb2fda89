use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sw_catalog::{CatalogClient, CatalogEndpoint, MetafieldRef, Reconciler};
use sw_config::StockwatchConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: StockwatchConfig,
    pub reconciler: Arc<Reconciler<CatalogClient>>,
}

impl AppContext {
    /// Build the registry, catalog client and pipeline from validated config.
    pub fn init(config: StockwatchConfig) -> anyhow::Result<Self> {
        let registry = config
            .category_registry()
            .context("invalid category configuration")?;

        let client = CatalogClient::new(CatalogEndpoint {
            graphql_url: config.shopify.graphql_url(),
            access_token: config.shopify.access_token.clone(),
            timeout: Duration::from_secs(config.shopify.timeout_secs),
            user_agent: config.shopify.user_agent.clone(),
        })
        .context("failed to initialize catalog client")?;

        tracing::debug!(
            endpoint = client.graphql_url(),
            categories = registry.len(),
            "catalog client ready"
        );

        let threshold = MetafieldRef::new(&config.threshold.namespace, &config.threshold.key);
        let reconciler = Arc::new(Reconciler::new(registry, client, threshold));

        Ok(Self { config, reconciler })
    }
}
