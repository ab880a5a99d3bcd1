//! Fixed-bucket time aggregation for the dashboard charts.
//!
//! Buckets are fixed by the mode: an empty bucket emits 0, it is never
//! omitted, so chart axes stay stable regardless of data sparsity.
//! Records without a parseable timestamp are skipped, never an error.
//!
//! All bucketing is computed in the timezone of the supplied `now`, so
//! "today" means the caller's calendar day. Production call sites pass
//! `Local::now()`; tests pass fixed UTC instants.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Timelike, Utc};
use serde::Serialize;

use crate::models::{Application, Payment};

/// Number of four-hour buckets on the daily chart axis
/// (`00:00`, `04:00`, ... `24:00`).
pub const HOUR_BUCKETS: usize = 7;

/// Days in the rolling weekly window.
pub const WEEK_DAYS: usize = 7;

// ---------------------------------------------------------------------------
// Dated
// ---------------------------------------------------------------------------

/// Access to the timestamp a record is bucketed by.
pub trait Dated {
    fn timestamp(&self) -> Option<DateTime<Utc>>;
}

impl Dated for Application {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Dated for Payment {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }
}

// ---------------------------------------------------------------------------
// Bucketing modes
// ---------------------------------------------------------------------------

/// How records are grouped along the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucketing {
    /// Four-hour buckets over the current calendar day.
    HourOfDay,
    /// One bucket per day, rolling window `today - 6 ..= today`.
    DayOfWeek,
    /// One bucket per month, rolling window of `n` months ending with the
    /// current month.
    MonthWindow(usize),
}

/// One point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketPoint {
    pub label: String,
    pub value: f64,
}

/// Count value function: every matching record contributes 1.
pub fn count<T>(_: &T) -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// aggregate
// ---------------------------------------------------------------------------

/// Group records into time buckets and reduce each bucket.
///
/// `value` maps a record to its contribution (use [`count`] for counts or
/// a field accessor closure for sums; missing fields should map to 0).
/// `predicate` narrows which records participate at all.
pub fn aggregate<T, Tz, V, P>(
    records: &[T],
    bucketing: Bucketing,
    now: DateTime<Tz>,
    value: V,
    predicate: P,
) -> Vec<BucketPoint>
where
    T: Dated,
    Tz: TimeZone,
    V: Fn(&T) -> f64,
    P: Fn(&T) -> bool,
{
    let tz = now.timezone();
    let today = now.date_naive();

    let (labels, locate): (Vec<String>, Box<dyn Fn(chrono::NaiveDateTime) -> Option<usize>>) =
        match bucketing {
            Bucketing::HourOfDay => {
                let labels = (0..HOUR_BUCKETS)
                    .map(|i| format!("{:02}:00", i * 4))
                    .collect();
                let locate = Box::new(move |local: chrono::NaiveDateTime| {
                    if local.date() != today {
                        return None;
                    }
                    Some(local.hour() as usize / 4)
                }) as Box<dyn Fn(chrono::NaiveDateTime) -> Option<usize>>;
                (labels, locate)
            }
            Bucketing::DayOfWeek => {
                let days: Vec<NaiveDate> = (0..WEEK_DAYS as i64)
                    .map(|i| today - chrono::Duration::days(WEEK_DAYS as i64 - 1 - i))
                    .collect();
                let labels = days.iter().map(|d| d.format("%a").to_string()).collect();
                let locate = Box::new(move |local: chrono::NaiveDateTime| {
                    days.iter().position(|d| *d == local.date())
                }) as Box<dyn Fn(chrono::NaiveDateTime) -> Option<usize>>;
                (labels, locate)
            }
            Bucketing::MonthWindow(n) => {
                let month_start = today.with_day(1).unwrap_or(today);
                let months: Vec<NaiveDate> = (0..n as u32)
                    .rev()
                    .filter_map(|i| month_start.checked_sub_months(Months::new(i)))
                    .collect();
                let labels = months.iter().map(|m| m.format("%b").to_string()).collect();
                let locate = Box::new(move |local: chrono::NaiveDateTime| {
                    months
                        .iter()
                        .position(|m| m.year() == local.date().year() && m.month() == local.date().month())
                }) as Box<dyn Fn(chrono::NaiveDateTime) -> Option<usize>>;
                (labels, locate)
            }
        };

    let mut points: Vec<BucketPoint> = labels
        .into_iter()
        .map(|label| BucketPoint { label, value: 0.0 })
        .collect();

    for record in records {
        let ts = match record.timestamp() {
            Some(ts) => ts,
            None => continue,
        };
        if !predicate(record) {
            continue;
        }
        let local = ts.with_timezone(&tz).naive_local();
        if let Some(idx) = locate(local) {
            points[idx].value += value(record);
        }
    }

    points
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

/// Period-over-period growth percentage.
///
/// A zero previous period reports +100% when the current period is
/// nonzero and 0% otherwise: never a division by zero, never NaN.
pub fn growth_percent(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else if current > 0.0 {
        100.0
    } else {
        0.0
    }
}
