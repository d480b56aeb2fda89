//! Wire schema of the Admin GraphQL product query.
//!
//! Every remote field is optional here. Defaults are applied in
//! [`crate::normalize`] and nowhere else.

use serde::Deserialize;

use crate::error::CatalogError;

/// Top-level GraphQL response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Option<ProductsData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl CatalogResponse {
    /// Product edges, or [`CatalogError::Api`] when the response carries an
    /// `errors` member. Missing `data`/`products` yields an empty list.
    pub fn into_edges(self) -> Result<Vec<ProductEdge>, CatalogError> {
        if let Some(errors) = self.errors {
            return Err(CatalogError::Api {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }
        Ok(self
            .data
            .and_then(|data| data.products)
            .map(|products| products.edges)
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsData {
    #[serde(default)]
    pub products: Option<Connection<ProductNode>>,
}

/// Relay-style `{ edges: [{ node }] }` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

pub type ProductEdge = Edge<ProductNode>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    #[serde(default)]
    pub id: Option<String>,
    /// Kept untyped so a malformed title reaches the normalizer instead of
    /// failing the whole response.
    #[serde(default)]
    pub title: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub featured_image: Option<Image>,
    #[serde(default)]
    pub variants: Option<Connection<VariantNode>>,
    #[serde(default)]
    pub metafield: Option<Metafield>,
}

impl ProductNode {
    /// Inventory of the first variant, when reported.
    #[must_use]
    pub fn first_variant_quantity(&self) -> Option<i64> {
        self.variants
            .as_ref()?
            .edges
            .first()?
            .node
            .inventory_quantity
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metafield {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "data": {
            "products": {
                "edges": [
                    {
                        "node": {
                            "id": "gid://shopify/Product/1",
                            "title": "Lavender Quilt",
                            "featuredImage": { "url": "https://cdn.shopify.com/q.jpg" },
                            "variants": { "edges": [ { "node": { "inventoryQuantity": -4 } } ] },
                            "metafield": { "value": "6" }
                        }
                    },
                    {
                        "node": {
                            "id": "gid://shopify/Product/2",
                            "title": "Plain Cover",
                            "featuredImage": null,
                            "variants": { "edges": [] },
                            "metafield": null
                        }
                    }
                ]
            }
        },
        "extensions": { "cost": { "requestedQueryCost": 12 } }
    }"#;

    #[test]
    fn parses_nested_edges() {
        let response: CatalogResponse = serde_json::from_str(FIXTURE).unwrap();
        let edges = response.into_edges().unwrap();
        assert_eq!(edges.len(), 2);

        let first = &edges[0].node;
        assert_eq!(
            first.title.as_ref().and_then(serde_json::Value::as_str),
            Some("Lavender Quilt")
        );
        assert_eq!(first.first_variant_quantity(), Some(-4));
        assert_eq!(
            first.metafield.as_ref().and_then(|m| m.value.as_deref()),
            Some("6")
        );

        let second = &edges[1].node;
        assert!(second.featured_image.is_none());
        assert!(second.variants.as_ref().is_some_and(|v| v.edges.is_empty()));
        assert_eq!(second.first_variant_quantity(), None);
    }

    #[test]
    fn errors_member_is_api_error() {
        let response: CatalogResponse = serde_json::from_str(
            r#"{"errors":[{"message":"Throttled","extensions":{"code":"THROTTLED"}}]}"#,
        )
        .unwrap();
        let err = response.into_edges().unwrap_err();
        assert!(err.is_api_error());
        assert_eq!(err.to_string(), "GraphQL API error: Throttled");
    }

    #[test]
    fn missing_data_is_empty() {
        let response: CatalogResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_edges().unwrap().is_empty());

        let response: CatalogResponse =
            serde_json::from_str(r#"{"data":{"products":null}}"#).unwrap();
        assert!(response.into_edges().unwrap().is_empty());
    }

    #[test]
    fn non_string_title_still_decodes() {
        let response: CatalogResponse = serde_json::from_str(
            r#"{"data":{"products":{"edges":[{"node":{"title":42,"variants":{"edges":[]}}}]}}}"#,
        )
        .unwrap();
        let edges = response.into_edges().unwrap();
        assert_eq!(edges[0].node.title, Some(serde_json::json!(42)));
    }
}
