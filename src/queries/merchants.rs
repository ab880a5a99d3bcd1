//! Merchant queries.

use super::{fetch_all, fetch_one};
use crate::error::Result;
use crate::filter::{self, BranchIndex, FilterCriteria};
use crate::models::Merchant;
use crate::paginate::{paginate, Paged};
use crate::source::{DataSource, EntityKind};

/// Query interface for merchants.
pub struct MerchantQuery<'a> {
    source: &'a dyn DataSource,
}

impl<'a> MerchantQuery<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    pub fn list_all(&self) -> Result<Vec<Merchant>> {
        fetch_all(self.source, EntityKind::Merchant)
    }

    pub fn get(&self, id: i64) -> Result<Merchant> {
        fetch_one(self.source, EntityKind::Merchant, id)
    }

    pub fn page(
        &self,
        criteria: &FilterCriteria,
        page: usize,
        page_size: usize,
    ) -> Result<Paged<Merchant>> {
        let merchants = self.list_all()?;
        let filtered = filter::apply(&merchants, criteria, &BranchIndex::empty());
        Ok(paginate(&filtered, page, page_size))
    }
}
