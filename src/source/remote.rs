//! Live HTTP backend.
//!
//! Talks to the nasiya REST API with a lazily-constructed blocking
//! client. Responses are decoded tolerantly: the backend wraps list
//! bodies in several envelope shapes depending on endpoint age.

use std::cell::RefCell;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use super::{DataSource, EntityKind, ListOptions, Page};
use crate::error::{NasiyaError, Result};

/// Data source backed by the live REST API.
pub struct RemoteSource {
    base_url: String,
    timeout: Duration,
    client: RefCell<Option<Client>>,
}

impl RemoteSource {
    /// Create a source for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client: RefCell::new(None),
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&self) -> Result<Client> {
        let mut slot = self.client.borrow_mut();
        if slot.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            *slot = Some(client);
        }
        Ok(slot.as_ref().cloned().unwrap())
    }

    fn url(&self, kind: EntityKind) -> String {
        format!("{}/{}", self.base_url, kind.endpoint())
    }
}

impl DataSource for RemoteSource {
    fn list(&self, kind: EntityKind, opts: &ListOptions) -> Result<Page<Value>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(page) = opts.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = opts.page_size {
            query.push(("pageSize", size.to_string()));
        }
        if let Some(ref search) = opts.search {
            query.push(("search", search.clone()));
        }
        if let Some(ref status) = opts.status {
            query.push(("status", status.clone()));
        }
        if let Some(ref region) = opts.region {
            query.push(("region", region.clone()));
        }
        if let Some(id) = opts.fillial_id {
            query.push(("fillialId", id.to_string()));
        }
        if let Some(id) = opts.merchant_id {
            query.push(("merchantId", id.to_string()));
        }

        let url = self.url(kind);
        log::debug!("GET {} ({} params)", url, query.len());

        let resp = self
            .client()?
            .get(&url)
            .query(&query)
            .send()?
            .error_for_status()?;
        let body: Value = resp.json()?;

        Ok(decode_page(body, opts))
    }

    fn get(&self, kind: EntityKind, id: i64) -> Result<Value> {
        let url = format!("{}/{}", self.url(kind), id);
        let resp = self.client()?.get(&url).send()?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(NasiyaError::NotFound(format!("{} id {}", kind, id)));
        }
        let resp = resp.error_for_status()?;
        let body: Value = resp.json()?;

        // Some endpoints wrap single records in {data: {...}}.
        Ok(match body {
            Value::Object(ref map) if map.contains_key("data") => {
                map.get("data").cloned().unwrap_or(Value::Null)
            }
            other => other,
        })
    }
}

/// Decode a list response body into a [`Page`].
///
/// Accepts `{items, total, page, pageSize}`, `{data: [...], total?}` and
/// bare-array bodies. Anything else decodes as an empty page.
fn decode_page(body: Value, opts: &ListOptions) -> Page<Value> {
    let page = opts.page.unwrap_or(1);
    let page_size = opts.page_size.unwrap_or(0);

    match body {
        Value::Array(items) => {
            let total = items.len();
            Page {
                items,
                total,
                page,
                page_size,
            }
        }
        Value::Object(mut map) => {
            let items = match map.remove("items").or_else(|| map.remove("data")) {
                Some(Value::Array(arr)) => arr,
                _ => Vec::new(),
            };
            let total = map
                .get("total")
                .and_then(|v| v.as_u64())
                .map(|n| n as usize)
                .unwrap_or(items.len());
            let page = map
                .get("page")
                .and_then(|v| v.as_u64())
                .map(|n| n as usize)
                .unwrap_or(page);
            let page_size = map
                .get("pageSize")
                .and_then(|v| v.as_u64())
                .map(|n| n as usize)
                .unwrap_or(page_size);
            Page {
                items,
                total,
                page,
                page_size,
            }
        }
        _ => Page::empty(),
    }
}
