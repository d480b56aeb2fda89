//! Location of the per-product reorder point annotation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThresholdConfig {
    /// Metafield namespace (e.g., `custom`).
    #[serde(default)]
    pub namespace: String,

    /// Metafield key (e.g., `restock_threshold`).
    #[serde(default)]
    pub key: String,
}

impl ThresholdConfig {
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn missing_fields(&self) -> Vec<String> {
        [("namespace", &self.namespace), ("key", &self.key)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_both_namespace_and_key() {
        let mut config = ThresholdConfig::default();
        assert_eq!(config.missing_fields(), vec!["namespace", "key"]);

        config.namespace = "custom".into();
        assert_eq!(config.missing_fields(), vec!["key"]);

        config.key = "restock_threshold".into();
        assert!(config.is_configured());
    }
}
