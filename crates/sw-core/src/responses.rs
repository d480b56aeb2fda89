//! Page responses handed to the presentation layer.
//!
//! These structs define the JSON shape printed by `stockwatch urgent`,
//! `stockwatch category <slug>` and `stockwatch probe`, and the data the HTML
//! dashboard renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::AlertRecord;

/// Title of the global negative-stock page.
pub const URGENT_PAGE_TITLE: &str = "Urgent";

/// Title of the diagnostic probe page.
pub const PROBE_PAGE_TITLE: &str = "All Products Test";

/// Whether the catalog answered.
///
/// An empty list can mean "nothing to restock" or "the catalog could not be
/// read"; the status tells the two apart without exposing error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Ok,
    CatalogUnavailable,
}

impl PageStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::CatalogUnavailable => "catalog_unavailable",
        }
    }
}

/// A ranked list of products needing restock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertPage {
    pub page_title: String,
    pub status: PageStatus,
    pub fetched_at: DateTime<Utc>,
    pub products: Vec<AlertRecord>,
}

impl AlertPage {
    #[must_use]
    pub fn new(page_title: &str, products: Vec<AlertRecord>) -> Self {
        Self {
            page_title: page_title.to_string(),
            status: PageStatus::Ok,
            fetched_at: Utc::now(),
            products,
        }
    }

    /// Empty page shown when the catalog failed.
    #[must_use]
    pub fn unavailable(page_title: &str) -> Self {
        Self {
            page_title: page_title.to_string(),
            status: PageStatus::CatalogUnavailable,
            fetched_at: Utc::now(),
            products: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.status == PageStatus::CatalogUnavailable
    }
}

/// One unfiltered catalog product, as seen by the probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeRecord {
    pub title: String,
    /// Remote publication status (e.g. `ACTIVE`, `DRAFT`).
    pub status: Option<String>,
    pub image_url: Option<String>,
    /// `None` when the product has no variant data.
    pub current_quantity: Option<i64>,
}

/// Response from `stockwatch probe`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbePage {
    pub page_title: String,
    pub status: PageStatus,
    pub fetched_at: DateTime<Utc>,
    pub products: Vec<ProbeRecord>,
}

impl ProbePage {
    #[must_use]
    pub fn new(products: Vec<ProbeRecord>) -> Self {
        Self {
            page_title: PROBE_PAGE_TITLE.to_string(),
            status: PageStatus::Ok,
            fetched_at: Utc::now(),
            products,
        }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            page_title: PROBE_PAGE_TITLE.to_string(),
            status: PageStatus::CatalogUnavailable,
            fetched_at: Utc::now(),
            products: Vec::new(),
        }
    }
}
