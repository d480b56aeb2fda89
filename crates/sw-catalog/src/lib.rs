//! # sw-catalog
//!
//! Shopify Admin GraphQL access and the inventory reconciliation pipeline.
//!
//! - [`query`]: builds the global / category / probe product queries
//! - [`client`]: [`CatalogSource`] seam and the reqwest-backed [`CatalogClient`]
//! - [`wire`]: the optional-everywhere response schema
//! - [`normalize`]: default substitution into [`sw_core::ProductRecord`]
//! - [`reconcile`]: query → normalize → evaluate → rank, with failure degradation

pub mod client;
pub mod normalize;
pub mod query;
pub mod reconcile;
pub mod wire;

mod error;
mod http;

pub use client::{CatalogClient, CatalogEndpoint, CatalogSource};
pub use error::{CatalogError, NormalizeError, ReconcileError};
pub use query::{MetafieldRef, QuerySpec};
pub use reconcile::{AlertView, Reconciler};
pub use wire::CatalogResponse;
