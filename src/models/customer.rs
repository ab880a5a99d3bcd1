use serde::{Deserialize, Serialize};

use super::Application;
use crate::status::{is_completed, Category};

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

/// A customer, optionally carrying their nested application history.
///
/// The backend sometimes ships aggregate counters and sometimes the full
/// `zayavkalar` array. [`Customer::counters`] reconciles the two: the
/// nested array, when present, is authoritative and the counters are
/// recomputed from it with the crate's classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub passport: Option<String>,
    pub region: Option<String>,
    #[serde(default)]
    pub total_applications: usize,
    #[serde(default)]
    pub active_applications: usize,
    #[serde(default)]
    pub completed_applications: usize,
    #[serde(default)]
    pub rejected_applications: usize,
    #[serde(default)]
    pub debt: f64,
    #[serde(default)]
    pub zayavkalar: Vec<Application>,
}

/// Application counters for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCounters {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub rejected: usize,
}

impl Customer {
    /// Authoritative application counters.
    ///
    /// When `zayavkalar` is present the counters are recomputed from it:
    /// `completed` counts terminal approved statuses, `active` the rest of
    /// the Approved bucket, `rejected` the Rejected bucket. Backend-supplied
    /// counters are used only when the nested array is absent.
    pub fn counters(&self) -> CustomerCounters {
        if self.zayavkalar.is_empty() {
            return CustomerCounters {
                total: self.total_applications,
                active: self.active_applications,
                completed: self.completed_applications,
                rejected: self.rejected_applications,
            };
        }

        let mut counters = CustomerCounters {
            total: self.zayavkalar.len(),
            active: 0,
            completed: 0,
            rejected: 0,
        };
        for app in &self.zayavkalar {
            let raw = app.raw_status();
            match Category::classify(raw) {
                Category::Approved if is_completed(raw) => counters.completed += 1,
                Category::Approved => counters.active += 1,
                Category::Rejected => counters.rejected += 1,
                _ => {}
            }
        }
        counters
    }
}
