//! Derived debt queries: applications joined with their payments.

use chrono::{DateTime, Utc};

use super::{fetch_all, fetch_one};
use crate::debt::{self, Debt};
use crate::error::Result;
use crate::models::{Application, Payment};
use crate::source::{DataSource, EntityKind};
use crate::status::Category;

/// Query interface for the derived debt ledgers.
pub struct DebtQuery<'a> {
    source: &'a dyn DataSource,
}

impl<'a> DebtQuery<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Debt ledger for one application.
    pub fn for_application(&self, zayavka_id: i64, now: DateTime<Utc>) -> Result<Debt> {
        let app: Application = fetch_one(self.source, EntityKind::Application, zayavka_id)?;
        let payments = self.payments_for(zayavka_id)?;
        Ok(debt::compute(&app, &payments, now))
    }

    /// Debt ledgers for every approved application.
    ///
    /// Only the Approved bucket carries a repayment schedule; pending and
    /// rejected applications have nothing to owe.
    pub fn list_all(&self, now: DateTime<Utc>) -> Result<Vec<Debt>> {
        let apps: Vec<Application> = fetch_all(self.source, EntityKind::Application)?;
        let payments: Vec<Payment> = fetch_all(self.source, EntityKind::Payment)?;

        Ok(apps
            .iter()
            .filter(|a| Category::classify(a.raw_status()) == Category::Approved)
            .map(|a| debt::compute(a, &payments, now))
            .collect())
    }

    /// Debt ledgers with at least one installment past due.
    pub fn overdue(&self, now: DateTime<Utc>) -> Result<Vec<Debt>> {
        Ok(self
            .list_all(now)?
            .into_iter()
            .filter(Debt::is_overdue)
            .collect())
    }

    fn payments_for(&self, zayavka_id: i64) -> Result<Vec<Payment>> {
        let payments: Vec<Payment> = fetch_all(self.source, EntityKind::Payment)?;
        Ok(payments
            .into_iter()
            .filter(|p| p.zayavka_id == zayavka_id)
            .collect())
    }
}
