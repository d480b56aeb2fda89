//! # sw-core
//!
//! Core types and decision logic for Stockwatch.
//!
//! Everything in this crate is pure and synchronous:
//! - The category registry (slug → remote tag + display title)
//! - Normalized product records and the alert records derived from them
//! - The two alerting policies (global negative stock, per-category threshold)
//! - Stable ranking by needed quantity
//! - Page responses handed to the presentation layer
//! - Cross-cutting error types

pub mod category;
pub mod errors;
pub mod policy;
pub mod product;
pub mod rank;
pub mod responses;

pub use category::{CategoryDefinition, CategoryRegistry};
pub use errors::CoreError;
pub use policy::{AlertPolicy, evaluate};
pub use product::{AlertRecord, ProductRecord};
pub use rank::rank;
pub use responses::{AlertPage, PageStatus, ProbePage, ProbeRecord};
