//! Access control entries

use serde::{Deserialize, Serialize};

/// One organization the caller has access to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAcl {
    pub org_name: String,
    pub org_id: i64,
    pub currency: String,
    #[serde(default)]
    pub role_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_org_id: Option<i64>,
}
