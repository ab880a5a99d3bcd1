//! Application ("zayavka") queries.

use super::{fetch_all, fetch_one};
use crate::error::Result;
use crate::filter::{self, BranchIndex, FilterCriteria};
use crate::models::{Application, Branch};
use crate::paginate::{paginate, Paged};
use crate::source::{DataSource, EntityKind};
use crate::status::Category;

/// Query interface for applications.
pub struct ApplicationQuery<'a> {
    source: &'a dyn DataSource,
}

impl<'a> ApplicationQuery<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Fetch the entire collection.
    pub fn list_all(&self) -> Result<Vec<Application>> {
        fetch_all(self.source, EntityKind::Application)
    }

    /// Fetch a single application by id.
    pub fn get(&self, id: i64) -> Result<Application> {
        fetch_one(self.source, EntityKind::Application, id)
    }

    /// Fetch, filter and paginate in one call.
    ///
    /// The branch lookup needed for region filtering is fetched only when
    /// a region criterion is active.
    pub fn page(
        &self,
        criteria: &FilterCriteria,
        page: usize,
        page_size: usize,
    ) -> Result<Paged<Application>> {
        let apps = self.list_all()?;
        let branches = if criteria.region.is_some() {
            self.branch_index()?
        } else {
            BranchIndex::empty()
        };
        let filtered = filter::apply(&apps, criteria, &branches);
        Ok(paginate(&filtered, page, page_size))
    }

    /// Applications belonging to one branch.
    pub fn by_branch(&self, fillial_id: i64) -> Result<Vec<Application>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|a| a.fillial_id == Some(fillial_id))
            .collect())
    }

    /// Applications whose owning branch lies in the given region.
    pub fn by_region(&self, region: &str) -> Result<Vec<Application>> {
        let branches = self.branch_index()?;
        let criteria = FilterCriteria::new().region(region);
        Ok(filter::apply(&self.list_all()?, &criteria, &branches))
    }

    /// Applications classified into the given category.
    pub fn by_category(&self, category: Category) -> Result<Vec<Application>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|a| Category::classify(a.raw_status()) == category)
            .collect())
    }

    fn branch_index(&self) -> Result<BranchIndex> {
        let branches: Vec<Branch> = fetch_all(self.source, EntityKind::Branch)?;
        Ok(BranchIndex::new(&branches))
    }
}
