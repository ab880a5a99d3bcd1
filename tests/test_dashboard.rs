//! Unit tests for the dashboard view-models.

mod common;

use common::{app, days_ago, now, today_at};
use nasiya_sdk::dashboard::{
    daily_sales, monthly_revenue, status_breakdown, weekly_activity, RevenueWindow,
};

// ---------------------------------------------------------------------------
// Daily sales
// ---------------------------------------------------------------------------

#[test]
fn daily_sales_sums_only_approved_and_scales_to_thousands() {
    let apps = vec![
        app(1, "CONFIRMED", 1_000_000.0, Some(today_at(10))),
        app(2, "CREATED", 500_000.0, Some(today_at(10))),
    ];
    let sales = daily_sales(&apps, now());

    assert_eq!(sales.total, 1_000_000.0);
    let values: Vec<f64> = sales.series.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![0.0, 0.0, 1000.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn daily_sales_is_zero_shaped_for_no_data() {
    let sales = daily_sales(&[], now());
    assert_eq!(sales.total, 0.0);
    assert_eq!(sales.series.len(), 7);
    assert!(sales.series.iter().all(|p| p.value == 0.0));
}

// ---------------------------------------------------------------------------
// Weekly activity
// ---------------------------------------------------------------------------

#[test]
fn weekly_activity_builds_three_parallel_series() {
    let apps = vec![
        app(1, "CONFIRMED", 100.0, Some(today_at(9))),
        app(2, "CREATED", 100.0, Some(today_at(9))),
        app(3, "REJECTED", 100.0, Some(days_ago(2))),
    ];
    let weekly = weekly_activity(&apps, now());

    assert_eq!(weekly.labels.len(), 7);
    assert_eq!(weekly.approved.iter().sum::<f64>(), 1.0);
    assert_eq!(weekly.pending.iter().sum::<f64>(), 1.0);
    assert_eq!(weekly.rejected.iter().sum::<f64>(), 1.0);
}

#[test]
fn weekly_growth_compares_against_previous_window() {
    // Two approved this window, one approved in the preceding seven days.
    let apps = vec![
        app(1, "CONFIRMED", 100.0, Some(today_at(9))),
        app(2, "CONFIRMED", 100.0, Some(days_ago(3))),
        app(3, "CONFIRMED", 100.0, Some(days_ago(9))),
    ];
    let weekly = weekly_activity(&apps, now());
    assert_eq!(weekly.growth_percent, 100.0);
}

#[test]
fn weekly_growth_with_empty_previous_window() {
    let apps = vec![app(1, "CONFIRMED", 100.0, Some(today_at(9)))];
    let weekly = weekly_activity(&apps, now());
    assert_eq!(weekly.growth_percent, 100.0);

    let weekly = weekly_activity(&[], now());
    assert_eq!(weekly.growth_percent, 0.0);
}

// ---------------------------------------------------------------------------
// Monthly revenue
// ---------------------------------------------------------------------------

#[test]
fn monthly_revenue_windows_and_growth() {
    let apps = vec![
        // Current 2-month window: Feb + Mar = 150
        app(1, "CONFIRMED", 100.0, Some(now())),
        app(2, "CONFIRMED", 50.0, Some(days_ago(35))),
        // Previous window: Dec + Jan = 100
        app(3, "CONFIRMED", 100.0, Some(days_ago(65))),
        // Pending amounts never count
        app(4, "CREATED", 400.0, Some(now())),
    ];
    let revenue = monthly_revenue(&apps, RevenueWindow::TwoMonths, now());

    assert_eq!(revenue.points.len(), 2);
    assert_eq!(revenue.current_total, 150.0);
    assert_eq!(revenue.previous_total, 100.0);
    assert_eq!(revenue.growth_percent, 50.0);
}

#[test]
fn revenue_window_month_counts() {
    assert_eq!(RevenueWindow::TwoMonths.months(), 2);
    assert_eq!(RevenueWindow::SixMonths.months(), 6);
    assert_eq!(RevenueWindow::Year.months(), 12);

    let revenue = monthly_revenue(&[], RevenueWindow::Year, now());
    assert_eq!(revenue.points.len(), 12);
    assert_eq!(revenue.growth_percent, 0.0);
}

// ---------------------------------------------------------------------------
// Status breakdown
// ---------------------------------------------------------------------------

#[test]
fn breakdown_partitions_the_collection() {
    let apps = vec![
        app(1, "CONFIRMED", 100.0, None),
        app(2, "ACTIVE", 100.0, None),
        app(3, "CREATED", 100.0, None),
        app(4, "CANCELED_BY_SCORING", 100.0, None),
        app(5, "LIMIT", 100.0, None),
        app(6, "TOTALLY_UNKNOWN", 100.0, None),
    ];
    let breakdown = status_breakdown(&apps);

    assert_eq!(breakdown.approved, 2);
    assert_eq!(breakdown.pending, 2); // CREATED + unknown fail-open
    assert_eq!(breakdown.rejected, 1);
    assert_eq!(breakdown.limit, 1);
    assert_eq!(breakdown.total(), apps.len());
}
