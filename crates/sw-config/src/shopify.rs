//! Shopify Admin API configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    String::from("stockwatch/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShopifyConfig {
    /// Store base URL (e.g., `https://my-store.myshopify.com`).
    #[serde(default)]
    pub store_url: String,

    /// Admin API version (e.g., `2024-07`).
    #[serde(default)]
    pub api_version: String,

    /// Admin API access token, sent as `X-Shopify-Access-Token`.
    #[serde(default)]
    pub access_token: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            store_url: String::new(),
            api_version: String::new(),
            access_token: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ShopifyConfig {
    /// Check if every field needed to reach the API is present.
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<String> {
        [
            ("store_url", &self.store_url),
            ("api_version", &self.api_version),
            ("access_token", &self.access_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
    }

    /// GraphQL endpoint: `{store_url}/admin/api/{api_version}/graphql.json`.
    pub fn graphql_url(&self) -> String {
        format!(
            "{}/admin/api/{}/graphql.json",
            self.store_url.trim_end_matches('/'),
            self.api_version
        )
    }
}
