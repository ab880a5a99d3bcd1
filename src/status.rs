//! Canonical status classification.
//!
//! The backend reports application state as a loosely-overlapping set of
//! raw strings (`CONFIRMED`, `WAITING_SCORING`, `CANCELED_BY_CLIENT`, ...).
//! Every list filter and chart bucket works on the four canonical
//! categories produced here. This is the single mapping for the whole
//! crate; call sites must not re-derive their own substring rules.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Canonical status bucket for an application.
///
/// Every raw status string maps to exactly one category, so the four
/// buckets always partition a collection. Unknown, empty and missing
/// statuses fall open to [`Category::Pending`] rather than disappearing
/// from counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Approved,
    Pending,
    Rejected,
    Limit,
}

/// Raw statuses that mean the application went through.
const APPROVED: &[&str] = &["APPROVED", "CONFIRMED", "FINISHED", "COMPLETED", "ACTIVE"];

/// Raw statuses that mean the application was turned down.
const REJECTED: &[&str] = &[
    "REJECTED",
    "CANCELLED",
    "CANCELED",
    "CANCELED_BY_SCORING",
    "CANCELED_BY_CLIENT",
    "CANCELED_BY_DAILY",
];

/// Raw statuses for applications still moving through the pipeline.
const PENDING: &[&str] = &[
    "CREATED",
    "ADDED_DETAIL",
    "WAITING_SCORING",
    "ADDED_PRODUCT",
    "WAITING_BANK_UPDATE",
    "WAITING_BANK_CONFIRM",
    "PENDING",
    "IN_PROGRESS",
    "NEW",
];

impl Category {
    /// Classify a raw backend status string.
    ///
    /// Exact matches win first (`WAITING_SCORING` is Pending even though it
    /// contains `SCORING`). For values outside the known sets, Rejected
    /// substrings are checked before Limit substrings, so a string
    /// containing both is bucketed as Rejected, never double-counted.
    pub fn classify(raw: Option<&str>) -> Category {
        let status = match raw {
            Some(s) => s.trim().to_uppercase(),
            None => return Category::Pending,
        };

        if APPROVED.contains(&status.as_str()) {
            return Category::Approved;
        }
        if REJECTED.contains(&status.as_str()) {
            return Category::Rejected;
        }
        if status == "LIMIT" {
            return Category::Limit;
        }
        if PENDING.contains(&status.as_str()) {
            return Category::Pending;
        }

        // Substring fallback for statuses the backend grew since this list
        // was written. Order matters: Rejected before Limit.
        if status.contains("CANCELED") || status.contains("CANCELLED") || status.contains("SCORING")
        {
            return Category::Rejected;
        }
        if status.contains("LIMIT") {
            return Category::Limit;
        }

        Category::Pending
    }

    /// All four categories in display order.
    pub fn all() -> [Category; 4] {
        [
            Category::Approved,
            Category::Pending,
            Category::Rejected,
            Category::Limit,
        ]
    }

    /// Uzbek display label, as shown in the dashboard tables.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Approved => "Tasdiqlangan",
            Category::Pending => "Kutilmoqda",
            Category::Rejected => "Rad etilgan",
            Category::Limit => "Limit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Raw-status helpers
// ---------------------------------------------------------------------------

/// Whether a raw status is a *terminal* approved state (loan fully closed).
///
/// Used by customer counters to split [`Category::Approved`] into completed
/// (`FINISHED`/`COMPLETED`) and still-running (`APPROVED`/`CONFIRMED`/`ACTIVE`)
/// applications.
pub fn is_completed(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|s| s.trim().to_uppercase()).as_deref(),
        Some("FINISHED") | Some("COMPLETED")
    )
}
