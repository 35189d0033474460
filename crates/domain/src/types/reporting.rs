//! Reporting payloads

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::money::Money;
use super::selector::Selector;

/// Body of every `POST /reports/...` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub start_time: String,
    pub end_time: String,
    /// `HOURLY`, `DAILY`, `WEEKLY` or `MONTHLY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub return_grand_totals: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub return_records_with_no_metrics: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub return_row_totals: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Wrapped report shape: `{"reportingDataResponse": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub reporting_data_response: ReportingDataResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingDataResponse {
    #[serde(default)]
    pub row: Vec<ReportRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grand_totals: Option<ReportRow>,
}

impl ReportingDataResponse {
    /// Decode either the wrapped or the bare report shape.
    ///
    /// # Errors
    /// Returns the wrapped-shape decode error when neither shape matches.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match serde_json::from_value::<ReportResponse>(value.clone()) {
            Ok(wrapped) => Ok(wrapped.reporting_data_response),
            Err(wrapped_err) => serde_json::from_value::<Self>(value).map_err(|_| wrapped_err),
        }
    }
}

/// One report row; `metadata` depends on the report kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub other: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<SpendRow>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub granularity: Vec<GranularityRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<InsightData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendRow {
    #[serde(default)]
    pub impressions: i64,
    #[serde(default)]
    pub taps: i64,
    #[serde(default)]
    pub installs: i64,
    #[serde(default)]
    pub new_downloads: i64,
    #[serde(default)]
    pub redownloads: i64,
    #[serde(default)]
    pub lat_on_installs: i64,
    #[serde(default)]
    pub lat_off_installs: i64,
    #[serde(default)]
    pub ttr: f64,
    #[serde(default, rename = "avgCPA")]
    pub avg_cpa: Money,
    #[serde(default, rename = "avgCPT")]
    pub avg_cpt: Money,
    #[serde(default)]
    pub local_spend: Money,
    #[serde(default)]
    pub conversion_rate: f64,
}

/// Time-bucketed metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GranularityRow {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<SpendRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_recommendation: Option<BidRecommendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRecommendation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_bid_amount: Option<Money>,
}
