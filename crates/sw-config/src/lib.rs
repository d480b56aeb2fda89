//! # sw-config
//!
//! Layered configuration loading for Stockwatch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STOCKWATCH_*` prefix, `__` as separator)
//! 2. Legacy environment names (`SHOPIFY_STORE_URL`, `METAFIELD_KEY`, ...)
//! 3. Project-level `stockwatch.toml` (or the file passed with `--config`)
//! 4. User-level `~/.config/stockwatch/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STOCKWATCH_SHOPIFY__STORE_URL` -> `shopify.store_url`,
//! `STOCKWATCH_THRESHOLD__KEY` -> `threshold.key`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sw_config::StockwatchConfig;
//!
//! let config = StockwatchConfig::load().expect("config");
//! config.validate().expect("required settings present");
//! println!("GraphQL endpoint: {}", config.shopify.graphql_url());
//! ```

mod error;
mod server;
mod shopify;
mod threshold;

pub use error::ConfigError;
pub use server::ServerConfig;
pub use shopify::ShopifyConfig;
pub use threshold::ThresholdConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use sw_core::category::builtin_categories;
use sw_core::{CategoryDefinition, CategoryRegistry};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "stockwatch.toml";

/// Flat environment names accepted for compatibility with `.env` files
/// written before the `STOCKWATCH_` names existed.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("SHOPIFY_STORE_URL", "shopify.store_url"),
    ("SHOPIFY_API_VERSION", "shopify.api_version"),
    ("SHOPIFY_ACCESS_TOKEN", "shopify.access_token"),
    ("METAFIELD_NAMESPACE", "threshold.namespace"),
    ("METAFIELD_KEY", "threshold.key"),
];

fn default_categories() -> Vec<CategoryDefinition> {
    builtin_categories()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StockwatchConfig {
    #[serde(default)]
    pub shopify: ShopifyConfig,
    #[serde(default)]
    pub threshold: ThresholdConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryDefinition>,
}

impl Default for StockwatchConfig {
    fn default() -> Self {
        Self {
            shopify: ShopifyConfig::default(),
            threshold: ThresholdConfig::default(),
            server: ServerConfig::default(),
            categories: default_categories(),
        }
    }
}

impl StockwatchConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are the caller's concern; load them before calling this.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(None).extract().map_err(ConfigError::from)
    }

    /// Load configuration using an explicit project config file.
    ///
    /// Unlike the implicit `stockwatch.toml`, an explicit file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("file '{}' does not exist", path.display()),
            });
        }
        Self::figment(Some(path))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// `project_file` replaces the default `stockwatch.toml` lookup. Public so
    /// tests can add providers on top.
    pub fn figment(project_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path =
            project_file.map_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Legacy flat env names
        figment = figment.merge(
            Env::raw().filter_map(|key| legacy_env_key(key.as_str()).map(Into::into)),
        );

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("STOCKWATCH_").split("__"))
    }

    /// Fail fast on settings every request depends on.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotConfigured`] when the `shopify` or `threshold`
    /// sections are incomplete; [`ConfigError::InvalidValue`] for malformed
    /// values or an invalid category list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.shopify.missing_fields();
        if !missing.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "shopify".to_string(),
                missing,
            });
        }

        let missing = self.threshold.missing_fields();
        if !missing.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "threshold".to_string(),
                missing,
            });
        }

        let store_url = self.shopify.store_url.trim();
        if !(store_url.starts_with("https://") || store_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "shopify.store_url".to_string(),
                reason: format!("'{store_url}' must start with http:// or https://"),
            });
        }

        if self.shopify.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "shopify.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        self.category_registry().map(|_| ())
    }

    /// Build the immutable category registry from the configured list.
    pub fn category_registry(&self) -> Result<CategoryRegistry, ConfigError> {
        CategoryRegistry::new(self.categories.clone()).map_err(|error| {
            ConfigError::InvalidValue {
                field: "categories".to_string(),
                reason: error.to_string(),
            }
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stockwatch").join("config.toml"))
    }
}

fn legacy_env_key(key: &str) -> Option<&'static str> {
    LEGACY_ENV
        .iter()
        .find(|(name, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, path)| *path)
}
