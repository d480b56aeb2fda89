//! Normalized product records and the alert records derived from them.

use serde::{Deserialize, Serialize};

/// A catalog product after default substitution.
///
/// Every field is resolved: nothing here is "maybe absent" except the image,
/// which the presentation layer is expected to handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub image_url: Option<String>,
    /// Inventory of the first variant; 0 when the product has no variants.
    /// May be negative (oversold).
    pub current_quantity: i64,
    /// Custom reorder point; 0 when the product carries no annotation.
    pub threshold: i64,
}

/// A product that crossed its alert condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(flatten)]
    pub product: ProductRecord,
    /// Units required to clear the alert. Always > 0.
    pub needed_quantity: i64,
}

impl AlertRecord {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.product.title
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.product.image_url.as_deref()
    }

    #[must_use]
    pub const fn current_quantity(&self) -> i64 {
        self.product.current_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_record_serializes_flat() {
        let alert = AlertRecord {
            product: ProductRecord {
                title: "Blue".to_string(),
                image_url: None,
                current_quantity: -3,
                threshold: 0,
            },
            needed_quantity: 3,
        };

        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(value["title"], "Blue");
        assert_eq!(value["current_quantity"], -3);
        assert_eq!(value["needed_quantity"], 3);
        assert!(value["image_url"].is_null());
        assert!(value.get("product").is_none());
    }
}
