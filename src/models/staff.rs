use serde::{Deserialize, Serialize};

use super::WorkStatus;

// ---------------------------------------------------------------------------
// Operator / Admin
// ---------------------------------------------------------------------------

/// A branch- or merchant-level operator account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: i64,
    pub fullname: Option<String>,
    pub phone: Option<String>,
    pub merchant_id: Option<i64>,
    pub fillial_id: Option<i64>,
    #[serde(default)]
    pub work_status: WorkStatus,
}

/// A back-office administrator account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: i64,
    pub fullname: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub work_status: WorkStatus,
}
