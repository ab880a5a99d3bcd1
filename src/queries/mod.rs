//! Per-entity query interfaces.
//!
//! Each interface is a lightweight wrapper borrowing the SDK's data
//! source, fetching the full collection and deriving views in memory.
//! Records that fail to decode are skipped with a warning rather than
//! failing the whole list; one malformed row must never blank a table.

pub mod applications;
pub mod branches;
pub mod customers;
pub mod dashboard;
pub mod debts;
pub mod merchants;
pub mod payments;
pub mod staff;

use serde::de::DeserializeOwned;

use crate::error::{NasiyaError, Result};
use crate::source::{DataSource, EntityKind, ListOptions};

/// Fetch an entire collection and decode it into typed records.
pub(crate) fn fetch_all<T: DeserializeOwned>(
    source: &dyn DataSource,
    kind: EntityKind,
) -> Result<Vec<T>> {
    let page = source.list(kind, &ListOptions::fetch_all())?;
    let mut records = Vec::with_capacity(page.items.len());
    for item in page.items {
        match serde_json::from_value(item) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("skipping undecodable {} record: {}", kind, e),
        }
    }
    Ok(records)
}

/// Fetch and decode a single record by id.
pub(crate) fn fetch_one<T: DeserializeOwned>(
    source: &dyn DataSource,
    kind: EntityKind,
    id: i64,
) -> Result<T> {
    let value = source.get(kind, id)?;
    serde_json::from_value(value).map_err(NasiyaError::from)
}
