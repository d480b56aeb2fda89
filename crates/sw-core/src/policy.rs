//! Alerting policies.
//!
//! ```text
//! Global     eligible iff current < 0              needed = -current
//! Threshold  eligible iff threshold - current > 0  needed = threshold - current
//! ```
//!
//! Records that do not cross their condition are dropped. Arithmetic
//! saturates at the `i64` bounds.

use serde::{Deserialize, Serialize};

use crate::product::{AlertRecord, ProductRecord};

/// Which alert condition to apply to a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPolicy {
    /// Oversold products across every category. Threshold data is ignored.
    Global,
    /// Products below their per-product reorder point.
    Threshold,
}

impl AlertPolicy {
    /// Units needed for `record` under this policy, if it is eligible.
    #[must_use]
    pub const fn needed_quantity(self, record: &ProductRecord) -> Option<i64> {
        let needed = match self {
            Self::Global => {
                if record.current_quantity >= 0 {
                    return None;
                }
                record.current_quantity.saturating_neg()
            }
            Self::Threshold => record.threshold.saturating_sub(record.current_quantity),
        };
        if needed > 0 { Some(needed) } else { None }
    }
}

/// Apply `policy` to `records`, keeping only the eligible ones in input order.
#[must_use]
pub fn evaluate(policy: AlertPolicy, records: Vec<ProductRecord>) -> Vec<AlertRecord> {
    records
        .into_iter()
        .filter_map(|product| {
            policy
                .needed_quantity(&product)
                .map(|needed_quantity| AlertRecord {
                    product,
                    needed_quantity,
                })
        })
        .collect()
}
