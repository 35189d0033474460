//! App and geo search results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub adam_id: i64,
    pub app_name: String,
    #[serde(default)]
    pub developer_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country_or_region_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoEntity {
    pub id: String,
    pub entity: String,
    pub display_name: String,
}
