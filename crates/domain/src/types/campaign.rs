//! Campaign payloads

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A campaign as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub adam_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries_or_regions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub serving_state_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_channel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supply_sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_time: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
}

/// Fields that can be changed on an existing campaign
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget_amount: Option<Money>,
}

impl CampaignUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Body of `PUT /campaigns/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignUpdateRequest {
    pub campaign: CampaignUpdate,
}
