//! In-memory filter pipeline.
//!
//! Every list view works the same way: fetch the whole collection, apply
//! the active criteria here, then paginate. Filtering is pure, keeps the
//! input order, and ANDs all active criteria; an absent criterion is a
//! no-op. Malformed criteria (a reversed date range) yield an empty
//! result, never an error; date pickers produce such ranges routinely.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{Admin, Application, Branch, Customer, Merchant, Operator, Payment};
use crate::status::Category;

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// Inclusive timestamp range. Either bound may be open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// The active filter state of a list view.
///
/// All fields are optional; `None` means the UI's "all" choice. Built
/// with the chained setters:
///
/// ```
/// use nasiya_sdk::filter::FilterCriteria;
/// use nasiya_sdk::status::Category;
///
/// let criteria = FilterCriteria::new()
///     .search("karimov")
///     .status(Category::Approved)
///     .region("Toshkent");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub region: Option<String>,
    pub fillial_id: Option<i64>,
    pub date_range: Option<DateRange>,
    pub status: Option<Category>,
    pub expired_month: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn fillial(mut self, id: i64) -> Self {
        self.fillial_id = Some(id);
        self
    }

    pub fn between(mut self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        self.date_range = Some(DateRange { start, end });
        self
    }

    pub fn status(mut self, category: Category) -> Self {
        self.status = Some(category);
        self
    }

    /// Loan term filter. Compared as strings, matching the backend's
    /// stringly-typed `expiredMonth` field.
    pub fn expired_month(mut self, months: impl ToString) -> Self {
        self.expired_month = Some(months.to_string());
        self
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// BranchIndex
// ---------------------------------------------------------------------------

/// Branch-id → region lookup for entities that have no region of their own.
///
/// Region filtering on applications resolves through the owning branch;
/// build this once per fetched branch list and share it across views.
#[derive(Debug, Clone, Default)]
pub struct BranchIndex {
    regions: HashMap<i64, String>,
}

impl BranchIndex {
    pub fn new(branches: &[Branch]) -> Self {
        let regions = branches
            .iter()
            .filter_map(|b| b.region.as_ref().map(|r| (b.id, r.clone())))
            .collect();
        Self { regions }
    }

    /// Index that resolves no branches; region filters then match nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn region_of(&self, branch_id: i64) -> Option<&str> {
        self.regions.get(&branch_id).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Filterable
// ---------------------------------------------------------------------------

/// Field access the pipeline needs from an entity.
///
/// `search_fields` is the ordered list of haystacks for free-text search;
/// a record matches if any field does. Entities without a given facet
/// keep the `None` defaults and the corresponding predicate treats them
/// per the pipeline rules (no timestamp → excluded under an active date
/// range; no branch and no own region → excluded under a region filter).
pub trait Filterable {
    fn search_fields(&self) -> Vec<String>;

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn branch_id(&self) -> Option<i64> {
        None
    }

    /// Region carried directly on the record (branches, customers).
    fn own_region(&self) -> Option<&str> {
        None
    }

    fn raw_status(&self) -> Option<&str> {
        None
    }

    fn expired_month(&self) -> Option<&str> {
        None
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Apply the criteria to a collection, preserving order.
pub fn apply<T: Filterable + Clone>(
    records: &[T],
    criteria: &FilterCriteria,
    branches: &BranchIndex,
) -> Vec<T> {
    records
        .iter()
        .filter(|r| matches(*r, criteria, branches))
        .cloned()
        .collect()
}

/// Whether a single record satisfies every active criterion.
pub fn matches<T: Filterable>(record: &T, criteria: &FilterCriteria, branches: &BranchIndex) -> bool {
    if let Some(ref needle) = criteria.search {
        let needle = needle.trim().to_lowercase();
        if !needle.is_empty() {
            let hit = record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
    }

    if let Some(id) = criteria.fillial_id {
        if record.branch_id() != Some(id) {
            return false;
        }
    } else if let Some(ref region) = criteria.region {
        // A concrete branch selection takes precedence over region.
        let record_region = record
            .own_region()
            .map(str::to_string)
            .or_else(|| {
                record
                    .branch_id()
                    .and_then(|id| branches.region_of(id))
                    .map(str::to_string)
            });
        match record_region {
            Some(r) if r.eq_ignore_ascii_case(region) => {}
            _ => return false,
        }
    }

    if let Some(ref range) = criteria.date_range {
        let ts = match record.timestamp() {
            Some(ts) => ts,
            // No timestamp: excluded whenever a range is active.
            None => return false,
        };
        if let Some(start) = range.start {
            if ts < start {
                return false;
            }
        }
        if let Some(end) = range.end {
            if ts > end {
                return false;
            }
        }
    }

    if let Some(category) = criteria.status {
        if Category::classify(record.raw_status()) != category {
            return false;
        }
    }

    if let Some(ref months) = criteria.expired_month {
        match record.expired_month() {
            Some(m) if m == months => {}
            _ => return false,
        }
    }

    true
}

// ---------------------------------------------------------------------------
// Filterable implementations
// ---------------------------------------------------------------------------

impl Filterable for Application {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(5);
        if let Some(ref name) = self.full_name {
            fields.push(name.clone());
        }
        if let Some(ref phone) = self.phone {
            fields.push(phone.clone());
        }
        if let Some(ref passport) = self.passport {
            fields.push(passport.clone());
        }
        fields.push(self.id.to_string());
        fields.push(Category::classify(self.raw_status()).label().to_string());
        fields
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn branch_id(&self) -> Option<i64> {
        self.fillial_id
    }

    fn raw_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn expired_month(&self) -> Option<&str> {
        self.expired_month.as_deref()
    }
}

impl Filterable for Branch {
    fn search_fields(&self) -> Vec<String> {
        [
            Some(self.name.clone()),
            self.region.clone(),
            self.address.clone(),
            self.director_name.clone(),
            self.director_phone.clone(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn branch_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn own_region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Filterable for Customer {
    fn search_fields(&self) -> Vec<String> {
        [
            self.full_name.clone(),
            self.phone.clone(),
            self.passport.clone(),
            self.region.clone(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn own_region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Filterable for Merchant {
    fn search_fields(&self) -> Vec<String> {
        [Some(self.name.clone()), self.phone.clone(), self.address.clone()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Filterable for Operator {
    fn search_fields(&self) -> Vec<String> {
        [self.fullname.clone(), self.phone.clone()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn branch_id(&self) -> Option<i64> {
        self.fillial_id
    }
}

impl Filterable for Admin {
    fn search_fields(&self) -> Vec<String> {
        [self.fullname.clone(), self.phone.clone()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Filterable for Payment {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.to_string(), self.zayavka_id.to_string()]
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }
}
