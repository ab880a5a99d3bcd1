use serde::{Deserialize, Serialize};

use super::WorkStatus;

/// A retail partner organization owning branches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub work_status: WorkStatus,
}
