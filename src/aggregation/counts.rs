//! Per-status order counts.
//!
//! Every catalog status gets an entry, even at zero. Codes missing from the
//! catalog are tallied separately instead of being dropped silently.

use crate::model::{OrderRecord, StatusCatalog};
use serde::Serialize;

/// Number of orders currently holding one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub code: u16,
    pub name: String,
    pub count: usize,
}

/// Per-status totals in catalog order, plus orders whose code is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub entries: Vec<StatusCount>,
    pub unknown: usize,
}

impl StatusCounts {
    /// Count for a status label; `None` only if the label is not in the catalog.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.count)
    }

    pub fn get_code(&self, code: u16) -> Option<usize> {
        self.entries.iter().find(|e| e.code == code).map(|e| e.count)
    }

    /// Sum over known statuses.
    pub fn known_total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Counts orders per catalog status.
///
/// Every status in `catalog` is reported, with zero when nothing matches. Orders
/// with a code outside the catalog go to [`StatusCounts::unknown`].
pub fn status_counts(records: &[OrderRecord], catalog: &StatusCatalog) -> StatusCounts {
    let mut entries: Vec<StatusCount> = catalog
        .entries()
        .iter()
        .map(|e| StatusCount {
            code: e.code,
            name: e.name.clone(),
            count: 0,
        })
        .collect();
    let mut unknown = 0;

    for record in records {
        match entries.iter_mut().find(|e| e.code == record.code) {
            Some(entry) => entry.count += 1,
            None => unknown += 1,
        }
    }

    StatusCounts { entries, unknown }
}
