//! Per-application debt tracking.
//!
//! The backend stores only the application and its raw payments; the
//! monthly ledger shown on the debt screens is derived here: an
//! equal-installment schedule against the loan amount, recorded payments
//! poured into it month by month, and a status per installment.

use chrono::{DateTime, Months, Utc};
use serde::Serialize;

use crate::models::{Application, Payment};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentStatus {
    Paid,
    Overdue,
    Pending,
}

/// One month of the repayment ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayment {
    /// 1-based month index within the term.
    pub month: u32,
    pub due_date: Option<DateTime<Utc>>,
    pub expected_amount: f64,
    pub paid_amount: f64,
    pub debt_amount: f64,
    pub status: InstallmentStatus,
}

/// The derived debt state of one application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub zayavka_id: i64,
    pub total_amount: f64,
    pub total_paid: f64,
    pub total_debt: f64,
    /// First month not yet fully paid; `None` when the loan is settled.
    pub current_month: Option<u32>,
    pub monthly_payments: Vec<MonthlyPayment>,
}

impl Debt {
    /// Whether any installment is past due.
    pub fn is_overdue(&self) -> bool {
        self.monthly_payments
            .iter()
            .any(|m| m.status == InstallmentStatus::Overdue)
    }
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Equal-installment schedule for a loan amount.
///
/// Installments are rounded to whole so'm; the final month absorbs the
/// remainder so the schedule sums exactly to `total`.
pub fn amortize(total: f64, months: u32) -> Vec<f64> {
    if months == 0 || total <= 0.0 {
        return vec![0.0; months as usize];
    }
    let per = (total / months as f64).round();
    let mut schedule = vec![per; months as usize];
    let last = total - per * (months as f64 - 1.0);
    schedule[months as usize - 1] = last;
    schedule
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Derive the debt ledger for one application from its recorded payments.
///
/// Payments are pooled and allocated to installments in waterfall order
/// (month 1 fills first). Due dates anchor at the application's creation
/// date; with no creation date the schedule anchors at `now`, so nothing
/// can be overdue. A missing or zero term yields totals only.
pub fn compute(app: &Application, payments: &[Payment], now: DateTime<Utc>) -> Debt {
    let total_amount = app.amount;
    let total_paid: f64 = payments
        .iter()
        .filter(|p| p.zayavka_id == app.id)
        .map(|p| p.amount)
        .sum();

    let months = app.term_months().unwrap_or(0);
    if months == 0 {
        return Debt {
            zayavka_id: app.id,
            total_amount,
            total_paid,
            total_debt: (total_amount - total_paid).max(0.0),
            current_month: None,
            monthly_payments: Vec::new(),
        };
    }

    let start = app.created_at.unwrap_or(now);
    let schedule = amortize(total_amount, months);

    let mut pool = total_paid;
    let mut monthly_payments = Vec::with_capacity(months as usize);
    let mut total_debt = 0.0;
    let mut current_month = None;

    for (i, &expected) in schedule.iter().enumerate() {
        let month = i as u32 + 1;
        let due_date = start.checked_add_months(Months::new(month));

        let paid = pool.min(expected);
        pool -= paid;
        let debt = (expected - paid).max(0.0);
        total_debt += debt;

        let status = if debt == 0.0 {
            InstallmentStatus::Paid
        } else if due_date.map(|d| d < now).unwrap_or(false) {
            InstallmentStatus::Overdue
        } else {
            InstallmentStatus::Pending
        };

        if status != InstallmentStatus::Paid && current_month.is_none() {
            current_month = Some(month);
        }

        monthly_payments.push(MonthlyPayment {
            month,
            due_date,
            expected_amount: expected,
            paid_amount: paid,
            debt_amount: debt,
            status,
        });
    }

    Debt {
        zayavka_id: app.id,
        total_amount,
        total_paid,
        total_debt,
        current_month,
        monthly_payments,
    }
}
