//! Unit tests for the derived debt ledger.

mod common;

use chrono::{TimeZone, Utc};
use common::{app, payment};
use nasiya_sdk::debt::{amortize, compute, InstallmentStatus};

fn jan(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, 10, 0, 0).unwrap()
}

fn mid_march() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[test]
fn equal_installments_sum_exactly() {
    let schedule = amortize(1_000_000.0, 3);
    assert_eq!(schedule, vec![333_333.0, 333_333.0, 333_334.0]);
    assert_eq!(schedule.iter().sum::<f64>(), 1_000_000.0);
}

#[test]
fn divisible_amounts_split_evenly() {
    assert_eq!(amortize(1_200_000.0, 3), vec![400_000.0; 3]);
}

#[test]
fn zero_month_schedule_is_empty() {
    assert!(amortize(1_000_000.0, 0).is_empty());
}

// ---------------------------------------------------------------------------
// Ledger computation
// ---------------------------------------------------------------------------

fn three_month_app() -> nasiya_sdk::models::Application {
    // Created Jan 10: installments due Feb 10, Mar 10, Apr 10.
    let mut a = app(1, "CONFIRMED", 1_200_000.0, Some(jan(10)));
    a.expired_month = Some("3".to_string());
    a
}

#[test]
fn waterfall_allocation_and_statuses() {
    let app = three_month_app();
    let payments = vec![payment(1, 1, 400_000.0, Some(jan(20)))];
    let debt = compute(&app, &payments, mid_march());

    assert_eq!(debt.total_amount, 1_200_000.0);
    assert_eq!(debt.total_paid, 400_000.0);
    assert_eq!(debt.total_debt, 800_000.0);
    assert_eq!(debt.current_month, Some(2));
    assert_eq!(debt.monthly_payments.len(), 3);

    let months = &debt.monthly_payments;
    assert_eq!(months[0].status, InstallmentStatus::Paid);
    assert_eq!(months[0].paid_amount, 400_000.0);
    // Due Mar 10, now Mar 12: past due.
    assert_eq!(months[1].status, InstallmentStatus::Overdue);
    assert_eq!(months[1].debt_amount, 400_000.0);
    // Due Apr 10: still ahead.
    assert_eq!(months[2].status, InstallmentStatus::Pending);
    assert!(debt.is_overdue());
}

#[test]
fn partial_payment_spills_into_the_next_month() {
    let app = three_month_app();
    let payments = vec![payment(1, 1, 600_000.0, Some(jan(20)))];
    let debt = compute(&app, &payments, mid_march());

    assert_eq!(debt.monthly_payments[0].paid_amount, 400_000.0);
    assert_eq!(debt.monthly_payments[1].paid_amount, 200_000.0);
    assert_eq!(debt.monthly_payments[1].debt_amount, 200_000.0);
    assert_eq!(debt.current_month, Some(2));
}

#[test]
fn fully_paid_loan_has_no_current_month() {
    let app = three_month_app();
    let payments = vec![
        payment(1, 1, 400_000.0, Some(jan(15))),
        payment(2, 1, 400_000.0, Some(jan(20))),
        payment(3, 1, 400_000.0, Some(jan(25))),
    ];
    let debt = compute(&app, &payments, mid_march());

    assert_eq!(debt.total_debt, 0.0);
    assert_eq!(debt.current_month, None);
    assert!(!debt.is_overdue());
    assert!(debt
        .monthly_payments
        .iter()
        .all(|m| m.status == InstallmentStatus::Paid));
}

#[test]
fn payments_for_other_applications_are_ignored() {
    let app = three_month_app();
    let payments = vec![payment(1, 99, 400_000.0, Some(jan(20)))];
    let debt = compute(&app, &payments, mid_march());
    assert_eq!(debt.total_paid, 0.0);
    assert_eq!(debt.total_debt, 1_200_000.0);
    assert_eq!(debt.current_month, Some(1));
}

#[test]
fn missing_term_yields_totals_only() {
    let app = app(1, "CONFIRMED", 1_000_000.0, Some(jan(10)));
    let payments = vec![payment(1, 1, 250_000.0, Some(jan(20)))];
    let debt = compute(&app, &payments, mid_march());

    assert!(debt.monthly_payments.is_empty());
    assert_eq!(debt.total_paid, 250_000.0);
    assert_eq!(debt.total_debt, 750_000.0);
    assert_eq!(debt.current_month, None);
}

#[test]
fn missing_created_at_anchors_at_now_and_is_never_overdue() {
    let mut a = app(1, "CONFIRMED", 900_000.0, None);
    a.expired_month = Some("3".to_string());
    let debt = compute(&a, &[], mid_march());

    assert_eq!(debt.monthly_payments.len(), 3);
    assert!(debt
        .monthly_payments
        .iter()
        .all(|m| m.status == InstallmentStatus::Pending));
}
