//! Branch ("fillial") queries.

use super::{fetch_all, fetch_one};
use crate::error::Result;
use crate::filter::{self, BranchIndex, FilterCriteria};
use crate::models::Branch;
use crate::paginate::{paginate, Paged};
use crate::source::{DataSource, EntityKind};

/// Query interface for branches.
pub struct BranchQuery<'a> {
    source: &'a dyn DataSource,
}

impl<'a> BranchQuery<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    pub fn list_all(&self) -> Result<Vec<Branch>> {
        fetch_all(self.source, EntityKind::Branch)
    }

    pub fn get(&self, id: i64) -> Result<Branch> {
        fetch_one(self.source, EntityKind::Branch, id)
    }

    /// Fetch, filter and paginate in one call. Branches carry their own
    /// region, so no lookup index is needed.
    pub fn page(
        &self,
        criteria: &FilterCriteria,
        page: usize,
        page_size: usize,
    ) -> Result<Paged<Branch>> {
        let branches = self.list_all()?;
        let filtered = filter::apply(&branches, criteria, &BranchIndex::empty());
        Ok(paginate(&filtered, page, page_size))
    }

    /// Distinct regions across all branches, sorted, for region pickers.
    pub fn regions(&self) -> Result<Vec<String>> {
        let mut regions: Vec<String> = self
            .list_all()?
            .into_iter()
            .filter_map(|b| b.region)
            .collect();
        regions.sort();
        regions.dedup();
        Ok(regions)
    }

    /// The id → region lookup shared by application-level region filters.
    pub fn index(&self) -> Result<BranchIndex> {
        Ok(BranchIndex::new(&self.list_all()?))
    }
}
