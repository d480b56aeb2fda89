//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sw_config::{ConfigError, StockwatchConfig};

const FULL_CONFIG: &str = r#"
[shopify]
store_url = "https://demo.myshopify.com"
api_version = "2024-07"
access_token = "shpat_toml"
timeout_secs = 12

[threshold]
namespace = "custom"
key = "restock_threshold"

[server]
bind = "0.0.0.0:8080"
"#;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", FULL_CONFIG)?;

        let config: StockwatchConfig =
            Figment::from(Serialized::defaults(StockwatchConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.shopify.store_url, "https://demo.myshopify.com");
        assert_eq!(config.shopify.api_version, "2024-07");
        assert_eq!(config.shopify.access_token, "shpat_toml");
        assert_eq!(config.shopify.timeout_secs, 12);
        assert_eq!(config.shopify.user_agent, "stockwatch/0.1");
        assert_eq!(config.threshold.namespace, "custom");
        assert_eq!(config.threshold.key, "restock_threshold");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.categories.len(), 4);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_from_working_dir() {
    Jail::expect_with(|jail| {
        jail.create_file("stockwatch.toml", FULL_CONFIG)?;

        let config = StockwatchConfig::load().expect("config loads");
        assert_eq!(config.shopify.access_token, "shpat_toml");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn categories_in_toml_replace_builtins() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
[[categories]]
slug = "pillow"
tag = "PIL"
title = "Pillow"

[[categories]]
slug = "throw"
tag = "THR"
title = "Throw"
"#,
        )?;

        let config =
            StockwatchConfig::load_from(std::path::Path::new("custom.toml")).expect("config loads");
        let registry = config.category_registry().expect("valid categories");

        let slugs: Vec<&str> = registry.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["pillow", "throw"]);
        assert_eq!(registry.lookup("throw").map(|c| c.tag.as_str()), Ok("THR"));
        Ok(())
    });
}

#[test]
fn duplicate_category_slugs_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "stockwatch.toml",
            &format!(
                "{FULL_CONFIG}\n{}",
                r#"
[[categories]]
slug = "same"
tag = "A"
title = "A"

[[categories]]
slug = "same"
tag = "B"
title = "B"
"#
            ),
        )?;

        let config = StockwatchConfig::load().expect("config loads");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "categories"
        ));
        Ok(())
    });
}

#[test]
fn explicit_missing_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = StockwatchConfig::load_from(std::path::Path::new("nope.toml"));
        assert!(matches!(result, Err(ConfigError::InvalidValue { field, .. }) if field == "config"));
        Ok(())
    });
}

#[test]
fn non_http_store_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "stockwatch.toml",
            &FULL_CONFIG.replace("https://demo.myshopify.com", "demo.myshopify.com"),
        )?;

        let config = StockwatchConfig::load().expect("config loads");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "shopify.store_url"
        ));
        Ok(())
    });
}
