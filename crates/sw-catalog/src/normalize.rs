//! Record normalization.
//!
//! The single place where absent remote fields get their defaults:
//!
//! | field              | source                           | when absent |
//! |--------------------|----------------------------------|-------------|
//! | `title`            | `node.title` (string)            | error       |
//! | `image_url`        | `node.featuredImage.url`         | `None`      |
//! | `current_quantity` | first variant `inventoryQuantity`| `0`         |
//! | `threshold`        | `node.metafield.value` (integer) | `0`         |

use serde_json::Value;
use sw_core::{ProbeRecord, ProductRecord};

use crate::error::NormalizeError;
use crate::wire::{ProductEdge, ProductNode};

/// Convert catalog edges into product records, preserving order.
///
/// # Errors
///
/// [`NormalizeError::MissingTitle`] when a product has no title,
/// [`NormalizeError::InvalidTitle`] when the title is not a string and
/// [`NormalizeError::InvalidThreshold`] when a threshold annotation is present
/// but not an integer.
pub fn normalize(edges: Vec<ProductEdge>) -> Result<Vec<ProductRecord>, NormalizeError> {
    edges
        .into_iter()
        .enumerate()
        .map(|(index, edge)| normalize_node(index, edge.node))
        .collect()
}

fn normalize_node(index: usize, node: ProductNode) -> Result<ProductRecord, NormalizeError> {
    let current_quantity = node.first_variant_quantity().unwrap_or(0);

    let title = match node.title {
        Some(Value::String(title)) => title,
        None | Some(Value::Null) => {
            return Err(NormalizeError::MissingTitle { index, id: node.id });
        }
        Some(_) => return Err(NormalizeError::InvalidTitle { index, id: node.id }),
    };

    let threshold = match node.metafield.and_then(|m| m.value) {
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| NormalizeError::InvalidThreshold {
                title: title.clone(),
                value,
            })?,
        None => 0,
    };

    Ok(ProductRecord {
        title,
        image_url: node.featured_image.and_then(|image| image.url),
        current_quantity,
        threshold,
    })
}

/// Lenient conversion for the diagnostic probe: nothing is an error, and a
/// missing quantity stays `None` instead of defaulting.
#[must_use]
pub fn normalize_probe(edges: Vec<ProductEdge>) -> Vec<ProbeRecord> {
    edges
        .into_iter()
        .map(|edge| {
            let node = edge.node;
            let current_quantity = node.first_variant_quantity();
            ProbeRecord {
                title: match node.title {
                    Some(Value::String(title)) => title,
                    Some(Value::Null) | None => String::new(),
                    Some(other) => other.to_string(),
                },
                status: node.status,
                image_url: node.featured_image.and_then(|image| image.url),
                current_quantity,
            }
        })
        .collect()
}
