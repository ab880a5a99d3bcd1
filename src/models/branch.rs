use serde::{Deserialize, Serialize};

use super::WorkStatus;

/// A merchant branch ("fillial").
///
/// Applications reference branches via `fillial_id`; there is no region
/// column on the application itself, so region-level filtering resolves
/// through the branch (see [`BranchIndex`](crate::filter::BranchIndex)).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub region: Option<String>,
    pub address: Option<String>,
    pub director_name: Option<String>,
    pub director_phone: Option<String>,
    pub merchant_id: Option<i64>,
    #[serde(default)]
    pub work_status: WorkStatus,
}
