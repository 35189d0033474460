//! Ad group payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::money::Money;

/// An ad group as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub serving_state_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_bid_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpa_goal: Option<Money>,
    #[serde(default)]
    pub automated_keywords_opt_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting_dimensions: Option<TargetingDimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_model: Option<String>,
}

/// Audience refinements; dimension contents are passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetingDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<TargetingDimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<TargetingDimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_class: Option<TargetingDimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<TargetingDimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_area: Option<TargetingDimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<TargetingDimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_downloaders: Option<TargetingDimension>,
    #[serde(default, rename = "daypart", skip_serializing_if = "Option::is_none")]
    pub day_part: Option<TargetingDimension>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetingDimension {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<Value>,
}

/// Fields that can be changed on an existing ad group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroupUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_bid_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpa_goal: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automated_keywords_opt_in: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl AdGroupUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
