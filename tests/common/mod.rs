//! Shared test fixtures.
//!
//! Provides compact record constructors, a fixed reference instant so
//! every time-window assertion is deterministic, and a small handcrafted
//! dataset wired the way the backend links entities (applications →
//! branches → regions, payments → applications, customers → nested
//! application history).

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use nasiya_sdk::models::{Application, Branch, Customer, Payment};
use nasiya_sdk::{DemoDataset, DemoSource};

/// Fixed reference instant: Wednesday 2025-03-12 12:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap()
}

/// Timestamp on the reference day at the given hour.
pub fn today_at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, hour, 0, 0).unwrap()
}

/// Timestamp `days` before the reference day, at noon.
pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - chrono::Duration::days(days)
}

pub fn app(id: i64, status: &str, amount: f64, created_at: Option<DateTime<Utc>>) -> Application {
    Application {
        id,
        status: Some(status.to_string()),
        amount,
        created_at,
        ..Application::default()
    }
}

pub fn branch(id: i64, name: &str, region: &str) -> Branch {
    Branch {
        id,
        name: name.to_string(),
        region: Some(region.to_string()),
        ..Branch::default()
    }
}

pub fn payment(id: i64, zayavka_id: i64, amount: f64, paid_at: Option<DateTime<Utc>>) -> Payment {
    Payment {
        id,
        zayavka_id,
        amount,
        paid_at,
        ..Payment::default()
    }
}

/// A handcrafted linked dataset:
///
/// - branches 1 (Toshkent) and 2 (Samarqand)
/// - applications 1–4 across both branches and several statuses, plus
///   application 5 with no timestamp
/// - payments covering the first installment of application 1
/// - customer 1 with a nested four-application history
pub fn sample_dataset() -> DemoDataset {
    let mut apps = vec![
        app(1, "CONFIRMED", 1_200_000.0, Some(today_at(10))),
        app(2, "CREATED", 500_000.0, Some(today_at(10))),
        app(3, "REJECTED", 800_000.0, Some(days_ago(2))),
        app(4, "LIMIT", 300_000.0, Some(days_ago(40))),
        app(5, "CONFIRMED", 700_000.0, None),
    ];
    apps[0].fillial_id = Some(1);
    apps[0].expired_month = Some("3".to_string());
    apps[0].full_name = Some("Aziz Karimov".to_string());
    apps[0].phone = Some("+998901234567".to_string());
    apps[0].passport = Some("AB1234567".to_string());
    apps[0].customer_id = Some(1);
    apps[1].fillial_id = Some(2);
    apps[1].full_name = Some("Bekzod Saidov".to_string());
    apps[2].fillial_id = Some(1);
    apps[3].fillial_id = Some(2);

    let customer = Customer {
        id: 1,
        full_name: Some("Aziz Karimov".to_string()),
        phone: Some("+998901234567".to_string()),
        passport: Some("AB1234567".to_string()),
        region: Some("Toshkent".to_string()),
        zayavkalar: vec![
            app(10, "CONFIRMED", 100.0, None),
            app(11, "FINISHED", 100.0, None),
            app(12, "REJECTED", 100.0, None),
            app(13, "CREATED", 100.0, None),
        ],
        ..Customer::default()
    };

    DemoDataset {
        applications: apps,
        branches: vec![
            branch(1, "Texnomart 1", "Toshkent"),
            branch(2, "Mediapark 2", "Samarqand"),
        ],
        customers: vec![customer],
        payments: vec![payment(1, 1, 400_000.0, Some(today_at(11)))],
        ..DemoDataset::default()
    }
}

/// A demo source serving [`sample_dataset`].
pub fn sample_source() -> DemoSource {
    DemoSource::with_dataset(sample_dataset())
}
