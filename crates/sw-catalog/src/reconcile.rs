//! The reconciliation pipeline.
//!
//! ```text
//! registry ─► QuerySpec ─► CatalogSource ─► normalize ─► evaluate ─► rank ─► AlertPage
//! ```
//!
//! One call runs exactly one catalog query. Catalog failures (transport or
//! API-level) are logged and collapse to an empty page labeled
//! [`PageStatus::CatalogUnavailable`](sw_core::PageStatus); an unknown slug
//! or a record that breaks the schema contract is returned as an error.

use sw_core::responses::URGENT_PAGE_TITLE;
use sw_core::{AlertPage, AlertPolicy, CategoryRegistry, ProbePage, evaluate, rank};

use crate::client::CatalogSource;
use crate::error::{CatalogError, ReconcileError};
use crate::normalize::{normalize, normalize_probe};
use crate::query::{MetafieldRef, QuerySpec};
use crate::wire::ProductEdge;

/// Which page to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertView<'a> {
    /// Oversold products across every registered category.
    Urgent,
    /// Products below threshold in the category with this slug.
    Category(&'a str),
}

/// Runs the pipeline against a [`CatalogSource`].
pub struct Reconciler<S> {
    registry: CategoryRegistry,
    source: S,
    threshold: MetafieldRef,
}

impl<S: CatalogSource> Reconciler<S> {
    #[must_use]
    pub const fn new(registry: CategoryRegistry, source: S, threshold: MetafieldRef) -> Self {
        Self {
            registry,
            source,
            threshold,
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Build the page for `view`.
    ///
    /// # Errors
    ///
    /// See [`Self::urgent`] and [`Self::category`].
    pub async fn view(&self, view: AlertView<'_>) -> Result<AlertPage, ReconcileError> {
        match view {
            AlertView::Urgent => self.urgent().await,
            AlertView::Category(slug) => self.category(slug).await,
        }
    }

    /// Oversold products across all registered tags, most oversold first.
    ///
    /// # Errors
    ///
    /// [`ReconcileError::Normalize`] when a returned product has no title.
    pub async fn urgent(&self) -> Result<AlertPage, ReconcileError> {
        let query = QuerySpec::global(self.registry.all_tags());
        self.build_page(URGENT_PAGE_TITLE, AlertPolicy::Global, &query)
            .await
    }

    /// Products in one category below their threshold, largest shortfall first.
    ///
    /// # Errors
    ///
    /// [`ReconcileError::Core`] (not found) for an unknown slug, checked
    /// before any catalog traffic; [`ReconcileError::Normalize`] for records
    /// that break the schema contract.
    pub async fn category(&self, slug: &str) -> Result<AlertPage, ReconcileError> {
        let category = self.registry.lookup(slug)?;
        let query = QuerySpec::category(
            &category.tag,
            &self.threshold.namespace,
            &self.threshold.key,
        );
        self.build_page(&category.title, AlertPolicy::Threshold, &query)
            .await
    }

    /// First `limit` catalog products, unfiltered, for connectivity checks.
    pub async fn probe(&self, limit: u16) -> ProbePage {
        let query = QuerySpec::probe(limit);
        match self.fetch_edges(&query).await {
            Some(edges) => {
                tracing::debug!(count = edges.len(), "probe returned product edges");
                ProbePage::new(normalize_probe(edges))
            }
            None => ProbePage::unavailable(),
        }
    }

    async fn build_page(
        &self,
        page_title: &str,
        policy: AlertPolicy,
        query: &QuerySpec,
    ) -> Result<AlertPage, ReconcileError> {
        let Some(edges) = self.fetch_edges(query).await else {
            return Ok(AlertPage::unavailable(page_title));
        };

        let fetched = edges.len();
        let records = normalize(edges)?;
        let alerts = rank(evaluate(policy, records));
        tracing::debug!(
            page = page_title,
            ?policy,
            fetched,
            alerts = alerts.len(),
            "reconciled catalog page"
        );
        Ok(AlertPage::new(page_title, alerts))
    }

    /// Run `query`; `None` means the catalog failed and the failure was logged.
    async fn fetch_edges(&self, query: &QuerySpec) -> Option<Vec<ProductEdge>> {
        let result = match self.source.execute(query).await {
            Ok(response) => response.into_edges(),
            Err(error) => Err(error),
        };

        match result {
            Ok(edges) => Some(edges),
            Err(error) => {
                log_catalog_failure(query, &error);
                None
            }
        }
    }
}

fn log_catalog_failure(query: &QuerySpec, error: &CatalogError) {
    let operation = query.operation_name();
    if error.is_api_error() {
        tracing::warn!(operation, %error, "catalog API returned errors; showing empty list");
    } else {
        tracing::warn!(operation, %error, "catalog request failed; showing empty list");
    }
}
