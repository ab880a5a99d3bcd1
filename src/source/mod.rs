//! The data-source seam between the SDK and its backend.
//!
//! Everything above this module is backend-agnostic: the live HTTP
//! backend ([`RemoteSource`]) and the in-memory demo backend
//! ([`DemoSource`]) satisfy the same contract, so the filter/aggregate
//! layer and the query interfaces never know which one they are talking
//! to.

pub mod demo;
pub mod remote;

pub use demo::{DemoDataset, DemoSource};
pub use remote::RemoteSource;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config;
use crate::error::Result;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The collections the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Application,
    Branch,
    Customer,
    Merchant,
    Operator,
    Admin,
    Payment,
}

impl EntityKind {
    /// REST endpoint path for this kind, relative to the base URL.
    pub fn endpoint(&self) -> &'static str {
        config::endpoints()[self]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

// ---------------------------------------------------------------------------
// ListOptions / Page
// ---------------------------------------------------------------------------

/// Advisory options for a list request.
///
/// The SDK's own call sites always request the maximal page
/// ([`ListOptions::fetch_all`]) and filter in memory, so a conforming
/// source only has to guarantee correct `items`/`total` for "give me
/// everything". The remaining fields are forwarded for backends that can
/// narrow server-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
    pub fillial_id: Option<i64>,
    pub merchant_id: Option<i64>,
}

impl ListOptions {
    /// Options that defeat server-side pagination.
    pub fn fetch_all() -> Self {
        Self {
            page: Some(1),
            page_size: Some(config::FETCH_ALL_PAGE_SIZE),
            ..Self::default()
        }
    }
}

/// One page of a listed collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// DataSource
// ---------------------------------------------------------------------------

/// Read capability over the backend's collections.
///
/// `list` never fails on an empty collection; `get` fails with
/// [`NasiyaError::NotFound`](crate::NasiyaError::NotFound) when the id is
/// absent. Mutations are out of the SDK's scope.
pub trait DataSource: Send {
    fn list(&self, kind: EntityKind, opts: &ListOptions) -> Result<Page<Value>>;

    fn get(&self, kind: EntityKind, id: i64) -> Result<Value>;
}
