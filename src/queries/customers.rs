//! Customer queries.

use super::{fetch_all, fetch_one};
use crate::error::Result;
use crate::filter::{self, BranchIndex, FilterCriteria};
use crate::models::{Customer, CustomerCounters};
use crate::paginate::{paginate, Paged};
use crate::source::{DataSource, EntityKind};

/// Query interface for customers.
pub struct CustomerQuery<'a> {
    source: &'a dyn DataSource,
}

impl<'a> CustomerQuery<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    pub fn list_all(&self) -> Result<Vec<Customer>> {
        fetch_all(self.source, EntityKind::Customer)
    }

    pub fn get(&self, id: i64) -> Result<Customer> {
        fetch_one(self.source, EntityKind::Customer, id)
    }

    /// Fetch, filter and paginate in one call.
    pub fn page(
        &self,
        criteria: &FilterCriteria,
        page: usize,
        page_size: usize,
    ) -> Result<Paged<Customer>> {
        let customers = self.list_all()?;
        let filtered = filter::apply(&customers, criteria, &BranchIndex::empty());
        Ok(paginate(&filtered, page, page_size))
    }

    /// All customers paired with their authoritative counters
    /// (recomputed from the nested application history when present).
    pub fn list_with_counters(&self) -> Result<Vec<(Customer, CustomerCounters)>> {
        Ok(self
            .list_all()?
            .into_iter()
            .map(|c| {
                let counters = c.counters();
                (c, counters)
            })
            .collect())
    }
}
