//! Client-side pagination over filtered collections.

use serde::Serialize;

/// One page of records plus the metadata the table footer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice a collection into the requested page.
///
/// `page` is 1-based; out-of-range pages return an empty slice rather
/// than failing, and `total_pages` is never below 1 even for an empty
/// collection. A zero `page_size` is treated as 1. Callers must reset
/// `page` to 1 whenever their filter criteria change
/// ([`ListView`](crate::view::ListView) does this automatically).
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> Paged<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = records.len();
    let total_pages = (total.div_ceil(page_size)).max(1);

    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Paged {
        items: records[start..end].to_vec(),
        page,
        page_size,
        total,
        total_pages,
    }
}
