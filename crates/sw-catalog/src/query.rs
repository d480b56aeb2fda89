//! GraphQL query construction.
//!
//! Three shapes are supported:
//! - **global**: every product carrying any of a set of tags, no threshold
//! - **category**: products carrying one tag, plus the threshold metafield
//! - **probe**: the first few products with no filter, plus their status
//!
//! The product search string (`tag:'A' OR tag:'B'`), page size and metafield
//! coordinates are passed as GraphQL variables; only the selection set
//! differs between shapes.
//!
//! Tags are single-quoted without escaping. They come from the category
//! registry, never from request input.

use serde_json::{Value, json};

/// Largest page the Admin API serves in one request. There is no pagination.
pub const MAX_PAGE_SIZE: u16 = 250;

/// Default number of products returned by the probe.
pub const DEFAULT_PROBE_LIMIT: u16 = 5;

/// Namespaced location of the per-product threshold annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetafieldRef {
    pub namespace: String,
    pub key: String,
}

impl MetafieldRef {
    #[must_use]
    pub fn new(namespace: &str, key: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            key: key.to_string(),
        }
    }
}

/// Which selection set the query carries.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Projection {
    /// id, title, image, first variant quantity.
    Inventory,
    /// [`Projection::Inventory`] plus the threshold metafield.
    InventoryWithThreshold(MetafieldRef),
    /// [`Projection::Inventory`] plus product status.
    Probe,
}

/// A fully specified catalog query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    search: Option<String>,
    first: u16,
    projection: Projection,
}

impl QuerySpec {
    /// Products matching ANY of `tags`, without threshold data.
    pub fn global<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let clauses = tags
            .into_iter()
            .map(|tag| tag_clause(tag.as_ref()))
            .collect::<Vec<_>>();
        Self {
            search: Some(format!("({})", clauses.join(" OR "))),
            first: MAX_PAGE_SIZE,
            projection: Projection::Inventory,
        }
    }

    /// Products matching `tag`, with the threshold annotation at
    /// `namespace`/`key` (absent per product when unset).
    #[must_use]
    pub fn category(tag: &str, namespace: &str, key: &str) -> Self {
        Self {
            search: Some(tag_clause(tag)),
            first: MAX_PAGE_SIZE,
            projection: Projection::InventoryWithThreshold(MetafieldRef::new(namespace, key)),
        }
    }

    /// The first `limit` products in the catalog, unfiltered. `limit` is
    /// clamped to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn probe(limit: u16) -> Self {
        Self {
            search: None,
            first: limit.clamp(1, MAX_PAGE_SIZE),
            projection: Projection::Probe,
        }
    }

    /// Product search string, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub const fn first(&self) -> u16 {
        self.first
    }

    /// The threshold metafield requested, if any.
    #[must_use]
    pub const fn metafield(&self) -> Option<&MetafieldRef> {
        match &self.projection {
            Projection::InventoryWithThreshold(metafield) => Some(metafield),
            Projection::Inventory | Projection::Probe => None,
        }
    }

    /// GraphQL operation name, useful in logs.
    #[must_use]
    pub const fn operation_name(&self) -> &'static str {
        match self.projection {
            Projection::Inventory => "UrgentProducts",
            Projection::InventoryWithThreshold(_) => "CategoryProducts",
            Projection::Probe => "ProbeProducts",
        }
    }

    /// Render the GraphQL document.
    #[must_use]
    pub fn document(&self) -> String {
        let threshold = self.metafield().is_some();
        let probe = matches!(self.projection, Projection::Probe);

        let mut params = String::from("$first: Int!, $query: String");
        if threshold {
            params.push_str(", $namespace: String!, $key: String!");
        }

        let mut node = String::from("id\n        title\n");
        if probe {
            node.push_str("        status\n");
        }
        node.push_str("        featuredImage { url }\n");
        node.push_str("        variants(first: 1) { edges { node { inventoryQuantity } } }\n");
        if threshold {
            node.push_str("        metafield(namespace: $namespace, key: $key) { value }\n");
        }

        format!(
            "query {name}({params}) {{\n  products(first: $first, query: $query) {{\n    edges {{\n      node {{\n        {node}      }}\n    }}\n  }}\n}}\n",
            name = self.operation_name(),
        )
    }

    /// GraphQL variables matching [`Self::document`].
    #[must_use]
    pub fn variables(&self) -> Value {
        let mut variables = json!({
            "first": self.first,
            "query": self.search,
        });
        if let Some(metafield) = self.metafield() {
            variables["namespace"] = Value::from(metafield.namespace.as_str());
            variables["key"] = Value::from(metafield.key.as_str());
        }
        variables
    }

    /// JSON body POSTed to the GraphQL endpoint.
    #[must_use]
    pub fn request_body(&self) -> Value {
        json!({
            "query": self.document(),
            "variables": self.variables(),
        })
    }
}

fn tag_clause(tag: &str) -> String {
    format!("tag:'{tag}'")
}
