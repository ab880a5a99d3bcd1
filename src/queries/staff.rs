//! Operator and admin account queries.

use super::{fetch_all, fetch_one};
use crate::error::Result;
use crate::filter::{self, BranchIndex, FilterCriteria};
use crate::models::{Admin, Operator};
use crate::paginate::{paginate, Paged};
use crate::source::{DataSource, EntityKind};

// ---------------------------------------------------------------------------
// OperatorQuery
// ---------------------------------------------------------------------------

/// Query interface for operator accounts.
pub struct OperatorQuery<'a> {
    source: &'a dyn DataSource,
}

impl<'a> OperatorQuery<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    pub fn list_all(&self) -> Result<Vec<Operator>> {
        fetch_all(self.source, EntityKind::Operator)
    }

    pub fn get(&self, id: i64) -> Result<Operator> {
        fetch_one(self.source, EntityKind::Operator, id)
    }

    pub fn page(
        &self,
        criteria: &FilterCriteria,
        page: usize,
        page_size: usize,
    ) -> Result<Paged<Operator>> {
        let operators = self.list_all()?;
        let filtered = filter::apply(&operators, criteria, &BranchIndex::empty());
        Ok(paginate(&filtered, page, page_size))
    }

    /// Operators attached to one branch.
    pub fn by_branch(&self, fillial_id: i64) -> Result<Vec<Operator>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|o| o.fillial_id == Some(fillial_id))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// AdminQuery
// ---------------------------------------------------------------------------

/// Query interface for admin accounts.
pub struct AdminQuery<'a> {
    source: &'a dyn DataSource,
}

impl<'a> AdminQuery<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    pub fn list_all(&self) -> Result<Vec<Admin>> {
        fetch_all(self.source, EntityKind::Admin)
    }

    pub fn get(&self, id: i64) -> Result<Admin> {
        fetch_one(self.source, EntityKind::Admin, id)
    }
}
