//! Dashboard chart view-models.
//!
//! Pure reductions from an application snapshot to the structures the
//! four dashboard cards render. All "today"/"this week"/"this month"
//! windows are relative to the supplied `now` in its own timezone.

use chrono::{DateTime, Duration, Months, TimeZone};
use serde::Serialize;

use crate::aggregate::{self, aggregate, Bucketing, BucketPoint, Dated};
use crate::models::Application;
use crate::status::Category;

/// Chart series report monetary values in thousands of so'm.
const THOUSANDS: f64 = 1_000.0;

fn classified(app: &Application) -> Category {
    Category::classify(app.raw_status())
}

// ---------------------------------------------------------------------------
// Daily sales
// ---------------------------------------------------------------------------

/// Today's approved sales: total plus the four-hour series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    /// Sum of approved amounts today, in so'm.
    pub total: f64,
    /// Hourly series in thousands of so'm, one point per axis label.
    pub series: Vec<BucketPoint>,
}

/// Sum today's approved applications into the daily traffic chart.
pub fn daily_sales<Tz: TimeZone>(apps: &[Application], now: DateTime<Tz>) -> DailySales {
    let series = aggregate(
        apps,
        Bucketing::HourOfDay,
        now.clone(),
        |a| a.amount / THOUSANDS,
        |a| classified(a) == Category::Approved,
    );
    let total = series.iter().map(|p| p.value).sum::<f64>() * THOUSANDS;
    DailySales { total, series }
}

// ---------------------------------------------------------------------------
// Weekly activity
// ---------------------------------------------------------------------------

/// Rolling 7-day activity: three parallel count series per weekday.
///
/// Every application classifies exactly once, so per day the three
/// series partition the records that fall into
/// {Approved, Pending, Rejected}.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    pub labels: Vec<String>,
    pub approved: Vec<f64>,
    pub pending: Vec<f64>,
    pub rejected: Vec<f64>,
    /// Approved-count growth vs. the preceding 7-day window.
    pub growth_percent: f64,
}

pub fn weekly_activity<Tz: TimeZone>(apps: &[Application], now: DateTime<Tz>) -> WeeklyActivity {
    let series_for = |category: Category| {
        aggregate(
            apps,
            Bucketing::DayOfWeek,
            now.clone(),
            aggregate::count,
            |a: &Application| classified(a) == category,
        )
    };

    let approved = series_for(Category::Approved);
    let pending = series_for(Category::Pending);
    let rejected = series_for(Category::Rejected);

    let labels = approved.iter().map(|p| p.label.clone()).collect();
    let current: f64 = approved.iter().map(|p| p.value).sum();
    let previous = window_count(
        apps,
        now.clone() - Duration::days(13),
        now - Duration::days(7),
        Category::Approved,
    );

    WeeklyActivity {
        labels,
        approved: approved.into_iter().map(|p| p.value).collect(),
        pending: pending.into_iter().map(|p| p.value).collect(),
        rejected: rejected.into_iter().map(|p| p.value).collect(),
        growth_percent: aggregate::growth_percent(current, previous),
    }
}

/// Count category-matching applications with a timestamp inside the
/// inclusive day range `[from, to]` (by calendar date in `now`'s zone).
fn window_count<Tz: TimeZone>(
    apps: &[Application],
    from: DateTime<Tz>,
    to: DateTime<Tz>,
    category: Category,
) -> f64 {
    let tz = from.timezone();
    let from = from.date_naive();
    let to = to.date_naive();
    apps.iter()
        .filter(|a| classified(a) == category)
        .filter_map(|a| a.timestamp())
        .map(|ts| ts.with_timezone(&tz).date_naive())
        .filter(|d| *d >= from && *d <= to)
        .count() as f64
}

// ---------------------------------------------------------------------------
// Monthly revenue
// ---------------------------------------------------------------------------

/// Selectable month windows on the revenue chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueWindow {
    TwoMonths,
    SixMonths,
    Year,
}

impl RevenueWindow {
    pub fn months(self) -> usize {
        match self {
            RevenueWindow::TwoMonths => 2,
            RevenueWindow::SixMonths => 6,
            RevenueWindow::Year => 12,
        }
    }
}

/// Approved revenue per month over the selected window, with
/// period-over-period growth against the immediately preceding window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub points: Vec<BucketPoint>,
    pub current_total: f64,
    pub previous_total: f64,
    pub growth_percent: f64,
}

pub fn monthly_revenue<Tz: TimeZone>(
    apps: &[Application],
    window: RevenueWindow,
    now: DateTime<Tz>,
) -> MonthlyRevenue {
    let n = window.months();
    let points = month_sums(apps, n, now.clone());
    let current_total: f64 = points.iter().map(|p| p.value).sum();

    // The preceding window ends n months earlier.
    let previous_total = match now.checked_sub_months(Months::new(n as u32)) {
        Some(shifted) => month_sums(apps, n, shifted).iter().map(|p| p.value).sum(),
        None => 0.0,
    };

    MonthlyRevenue {
        points,
        current_total,
        previous_total,
        growth_percent: aggregate::growth_percent(current_total, previous_total),
    }
}

fn month_sums<Tz: TimeZone>(apps: &[Application], n: usize, now: DateTime<Tz>) -> Vec<BucketPoint> {
    aggregate(
        apps,
        Bucketing::MonthWindow(n),
        now,
        |a| a.amount,
        |a| classified(a) == Category::Approved,
    )
}

// ---------------------------------------------------------------------------
// Status breakdown
// ---------------------------------------------------------------------------

/// Pie-chart counts. The four buckets partition the collection: their
/// sum always equals the number of applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    pub limit: usize,
}

impl StatusBreakdown {
    pub fn total(&self) -> usize {
        self.approved + self.pending + self.rejected + self.limit
    }
}

pub fn status_breakdown(apps: &[Application]) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown {
        approved: 0,
        pending: 0,
        rejected: 0,
        limit: 0,
    };
    for app in apps {
        match classified(app) {
            Category::Approved => breakdown.approved += 1,
            Category::Pending => breakdown.pending += 1,
            Category::Rejected => breakdown.rejected += 1,
            Category::Limit => breakdown.limit += 1,
        }
    }
    breakdown
}
