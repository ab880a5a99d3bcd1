//! Nasiya SDK for Rust.
//!
//! Provides a high-level client for the data layer of a nasiya
//! (installment-sales) dashboard. Whole collections are fetched from the
//! backend, or from an in-memory demo source, and every list and chart
//! view is derived in memory: status classification, filtering,
//! time-bucket aggregation, pagination and debt ledgers.
//!
//! # Quick start
//!
//! ```no_run
//! use nasiya_sdk::NasiyaSdk;
//! use nasiya_sdk::filter::FilterCriteria;
//! use nasiya_sdk::status::Category;
//!
//! let sdk = NasiyaSdk::builder().demo_seed(42).build().unwrap();
//!
//! // Filtered, paginated applications
//! let criteria = FilterCriteria::new().status(Category::Approved);
//! let page = sdk.applications().page(&criteria, 1, 10).unwrap();
//!
//! // Today's sales chart
//! let sales = sdk.dashboard().daily_sales(chrono::Local::now());
//! println!("{} so'm across {} buckets", sales.total, sales.series.len());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod debt;
pub mod error;
pub mod filter;
pub mod models;
pub mod paginate;
pub mod queries;
pub mod source;
pub mod status;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncNasiyaSdk;
pub use error::{NasiyaError, Result};
pub use source::{DataSource, DemoDataset, DemoSource, EntityKind, ListOptions, Page, RemoteSource};
pub use status::Category;

use std::time::Duration;

// ---------------------------------------------------------------------------
// NasiyaSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`NasiyaSdk`] instance.
///
/// Use [`NasiyaSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](NasiyaSdkBuilder::build) to create the SDK.
pub struct NasiyaSdkBuilder {
    base_url: String,
    timeout: Duration,
    source: Option<Box<dyn DataSource>>,
}

impl Default for NasiyaSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            source: None,
        }
    }
}

impl NasiyaSdkBuilder {
    /// Set the backend base URL for the default remote source.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout for the default remote source.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Inject a data source, replacing the default remote one.
    ///
    /// This is the seam the whole SDK hangs off: anything implementing
    /// [`DataSource`] works: the bundled [`DemoSource`], or a test
    /// double.
    pub fn data_source(mut self, source: Box<dyn DataSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Use a generated in-memory demo dataset instead of the network.
    pub fn demo_seed(self, seed: u64) -> Self {
        self.data_source(Box::new(DemoSource::seeded(seed)))
    }

    /// Build the SDK.
    ///
    /// No network traffic happens here; the remote source's HTTP client
    /// is constructed lazily on the first request.
    pub fn build(self) -> Result<NasiyaSdk> {
        let source = match self.source {
            Some(source) => source,
            None => Box::new(RemoteSource::new(self.base_url, self.timeout)),
        };
        Ok(NasiyaSdk { source })
    }
}

// ---------------------------------------------------------------------------
// NasiyaSdk
// ---------------------------------------------------------------------------

/// The main entry point for the nasiya SDK.
///
/// Owns the injected [`DataSource`] and exposes domain-specific query
/// interfaces as lightweight borrowing wrappers.
pub struct NasiyaSdk {
    source: Box<dyn DataSource>,
}

impl NasiyaSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> NasiyaSdkBuilder {
        NasiyaSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the application ("zayavka") query interface.
    pub fn applications(&self) -> queries::applications::ApplicationQuery<'_> {
        queries::applications::ApplicationQuery::new(self.source.as_ref())
    }

    /// Access the branch ("fillial") query interface.
    pub fn branches(&self) -> queries::branches::BranchQuery<'_> {
        queries::branches::BranchQuery::new(self.source.as_ref())
    }

    /// Access the customer query interface.
    pub fn customers(&self) -> queries::customers::CustomerQuery<'_> {
        queries::customers::CustomerQuery::new(self.source.as_ref())
    }

    /// Access the merchant query interface.
    pub fn merchants(&self) -> queries::merchants::MerchantQuery<'_> {
        queries::merchants::MerchantQuery::new(self.source.as_ref())
    }

    /// Access the operator query interface.
    pub fn operators(&self) -> queries::staff::OperatorQuery<'_> {
        queries::staff::OperatorQuery::new(self.source.as_ref())
    }

    /// Access the admin query interface.
    pub fn admins(&self) -> queries::staff::AdminQuery<'_> {
        queries::staff::AdminQuery::new(self.source.as_ref())
    }

    /// Access the payment query interface.
    pub fn payments(&self) -> queries::payments::PaymentQuery<'_> {
        queries::payments::PaymentQuery::new(self.source.as_ref())
    }

    /// Access the derived-debt query interface.
    pub fn debts(&self) -> queries::debts::DebtQuery<'_> {
        queries::debts::DebtQuery::new(self.source.as_ref())
    }

    /// Access the dashboard chart interface.
    ///
    /// Dashboard queries degrade data-source failures to empty series
    /// rather than returning errors.
    pub fn dashboard(&self) -> queries::dashboard::DashboardQuery<'_> {
        queries::dashboard::DashboardQuery::new(self.source.as_ref())
    }

    // -- Raw access --------------------------------------------------------

    /// Return a reference to the underlying [`DataSource`] for advanced
    /// usage.
    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }
}
