use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de_opt_datetime;

/// A recorded payment against an application.
///
/// `manual` marks MIB payments: entries recorded by hand rather than by
/// the payment processor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub zayavka_id: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, deserialize_with = "de_opt_datetime")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub manual: bool,
}
