//! Payment queries.

use super::{fetch_all, fetch_one};
use crate::error::Result;
use crate::models::Payment;
use crate::source::{DataSource, EntityKind};

/// Query interface for recorded payments.
pub struct PaymentQuery<'a> {
    source: &'a dyn DataSource,
}

impl<'a> PaymentQuery<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    pub fn list_all(&self) -> Result<Vec<Payment>> {
        fetch_all(self.source, EntityKind::Payment)
    }

    pub fn get(&self, id: i64) -> Result<Payment> {
        fetch_one(self.source, EntityKind::Payment, id)
    }

    /// Payments recorded against one application.
    pub fn for_application(&self, zayavka_id: i64) -> Result<Vec<Payment>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|p| p.zayavka_id == zayavka_id)
            .collect())
    }

    /// Manually recorded (MIB) payments.
    pub fn manual(&self) -> Result<Vec<Payment>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|p| p.manual)
            .collect())
    }
}
