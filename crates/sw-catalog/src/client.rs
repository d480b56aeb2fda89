//! Catalog transport.

use std::future::Future;
use std::time::Duration;

use crate::error::CatalogError;
use crate::http::check_response;
use crate::query::QuerySpec;
use crate::wire::CatalogResponse;

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Anything that can answer a [`QuerySpec`].
///
/// [`CatalogClient`] is the production implementation; the pipeline only
/// depends on this trait.
pub trait CatalogSource {
    /// Run one query. Failures are returned, never retried.
    fn execute(
        &self,
        query: &QuerySpec,
    ) -> impl Future<Output = Result<CatalogResponse, CatalogError>> + Send;
}

/// Where and how to reach the Admin GraphQL API.
#[derive(Debug, Clone)]
pub struct CatalogEndpoint {
    /// Full `.../admin/api/{version}/graphql.json` URL.
    pub graphql_url: String,
    pub access_token: String,
    pub timeout: Duration,
    pub user_agent: String,
}

/// HTTP client for the Admin GraphQL API.
pub struct CatalogClient {
    http: reqwest::Client,
    graphql_url: String,
    access_token: String,
}

impl CatalogClient {
    /// Build a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// fails to build (e.g. TLS backend initialization).
    pub fn new(endpoint: CatalogEndpoint) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(endpoint.user_agent)
            .timeout(endpoint.timeout)
            .build()?;
        Ok(Self {
            http,
            graphql_url: endpoint.graphql_url,
            access_token: endpoint.access_token,
        })
    }

    #[must_use]
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }
}

impl CatalogSource for CatalogClient {
    async fn execute(&self, query: &QuerySpec) -> Result<CatalogResponse, CatalogError> {
        tracing::debug!(
            operation = query.operation_name(),
            search = query.search().unwrap_or(""),
            first = query.first(),
            "sending catalog query"
        );

        let resp = self
            .http
            .post(&self.graphql_url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&query.request_body())
            .send()
            .await?;
        let resp = check_response(resp).await?;

        resp.json::<CatalogResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
