//! Async wrapper around [`NasiyaSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! The underlying HTTP client is reqwest's blocking client, which must
//! not run on an async worker thread.
//!
//! # Example
//!
//! ```no_run
//! use nasiya_sdk::AsyncNasiyaSdk;
//!
//! async fn demo() -> nasiya_sdk::Result<()> {
//!     let sdk = AsyncNasiyaSdk::builder().demo_seed(42).build().await?;
//!
//!     // Run any sync SDK method via closure
//!     let apps = sdk.run(|s| s.applications().list_all()).await?;
//!     println!("{} applications", apps.len());
//!     Ok(())
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;

use crate::error::{NasiyaError, Result};
use crate::source::{DataSource, EntityKind, ListOptions, Page};
use crate::{NasiyaSdk, NasiyaSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncNasiyaSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncNasiyaSdk`] instance.
#[derive(Default)]
pub struct AsyncNasiyaSdkBuilder {
    inner: Option<NasiyaSdkBuilder>,
}

impl AsyncNasiyaSdkBuilder {
    fn inner(&mut self) -> NasiyaSdkBuilder {
        self.inner.take().unwrap_or_default()
    }

    /// Set the backend base URL for the default remote source.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let inner = self.inner().base_url(url);
        self.inner = Some(inner);
        self
    }

    /// Set the HTTP request timeout for the default remote source.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        let inner = self.inner().timeout(timeout);
        self.inner = Some(inner);
        self
    }

    /// Inject a data source, replacing the default remote one.
    pub fn data_source(mut self, source: Box<dyn DataSource>) -> Self {
        let inner = self.inner().data_source(source);
        self.inner = Some(inner);
        self
    }

    /// Use a generated in-memory demo dataset instead of the network.
    pub fn demo_seed(mut self, seed: u64) -> Self {
        let inner = self.inner().demo_seed(seed);
        self.inner = Some(inner);
        self
    }

    /// Build the async SDK on the blocking thread pool.
    pub async fn build(mut self) -> Result<AsyncNasiyaSdk> {
        let builder = self.inner();
        tokio::task::spawn_blocking(move || {
            let sdk = builder.build()?;
            Ok(AsyncNasiyaSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| NasiyaError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncNasiyaSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`NasiyaSdk`].
///
/// Cheap to clone; clones share the same underlying SDK.
#[derive(Clone)]
pub struct AsyncNasiyaSdk {
    inner: Arc<Mutex<NasiyaSdk>>,
}

impl AsyncNasiyaSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> AsyncNasiyaSdkBuilder {
        AsyncNasiyaSdkBuilder::default()
    }

    /// Run any sync SDK operation on the blocking thread pool.
    pub async fn run<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&NasiyaSdk) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let sdk = inner
                .lock()
                .map_err(|_| NasiyaError::InvalidArgument("SDK lock poisoned".to_string()))?;
            f(&sdk)
        })
        .await
        .map_err(|e| NasiyaError::InvalidArgument(format!("Task join error: {e}")))?
    }

    // -- Convenience methods -----------------------------------------------

    /// List raw records of a kind.
    pub async fn list(&self, kind: EntityKind, opts: ListOptions) -> Result<Page<Value>> {
        self.run(move |sdk| sdk.source().list(kind, &opts)).await
    }

    /// Fetch one raw record by id.
    pub async fn get(&self, kind: EntityKind, id: i64) -> Result<Value> {
        self.run(move |sdk| sdk.source().get(kind, id)).await
    }
}
