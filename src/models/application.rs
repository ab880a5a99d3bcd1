use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{de_opt_datetime, de_opt_stringy};

// ---------------------------------------------------------------------------
// Application (zayavka)
// ---------------------------------------------------------------------------

/// A loan/installment application ("zayavka").
///
/// `status` is the raw backend string; classify it with
/// [`Category::classify`](crate::status::Category::classify) rather than
/// matching on it directly. `created_at` is required for any time-bucketed
/// view; records missing it still count toward unfiltered totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    pub status: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payment_amount: f64,
    #[serde(default, deserialize_with = "de_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    pub fillial_id: Option<i64>,
    pub merchant_id: Option<i64>,
    pub customer_id: Option<i64>,
    /// Loan term in months. The backend historically returns this as a
    /// string; numeric values are normalized to their string form.
    #[serde(default, deserialize_with = "de_opt_stringy")]
    pub expired_month: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,

    // Denormalized customer fields the backend attaches for list views.
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub passport: Option<String>,
}

impl Application {
    /// Raw status as a borrowed str, for classification.
    pub fn raw_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Loan term in months, when the stringly-typed field parses.
    pub fn term_months(&self) -> Option<u32> {
        self.expired_month.as_deref()?.trim().parse().ok()
    }
}

// ---------------------------------------------------------------------------
// Product, a line item on an application
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub price: f64,
}
