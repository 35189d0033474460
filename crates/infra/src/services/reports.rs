//! Reporting endpoints
//!
//! The API answers either `{"reportingDataResponse": {...}}` or the inner
//! object directly; both are accepted.

use std::sync::Arc;

use searchads_domain::{ReportRequest, ReportingDataResponse};
use serde_json::Value;

use crate::api::{ApiClient, ApiError};

/// Which report to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Campaigns,
    AdGroups { campaign_id: i64 },
    Keywords { campaign_id: i64 },
    SearchTerms { campaign_id: i64 },
}

impl ReportKind {
    pub fn path(&self) -> String {
        match self {
            Self::Campaigns => "/reports/campaigns".to_string(),
            Self::AdGroups { campaign_id } => format!("/reports/campaigns/{campaign_id}/adgroups"),
            Self::Keywords { campaign_id } => format!("/reports/campaigns/{campaign_id}/keywords"),
            Self::SearchTerms { campaign_id } => {
                format!("/reports/campaigns/{campaign_id}/searchterms")
            }
        }
    }
}

pub struct ReportService {
    client: Arc<ApiClient>,
}

impl ReportService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn run(
        &self,
        kind: ReportKind,
        request: &ReportRequest,
    ) -> Result<ReportingDataResponse, ApiError> {
        let raw: Value = self.client.post(&kind.path(), request).await?.require()?;
        ReportingDataResponse::from_value(raw)
            .map_err(|e| ApiError::Decoding(format!("parsing report response: {e}")))
    }

    pub async fn campaigns(&self, request: &ReportRequest) -> Result<ReportingDataResponse, ApiError> {
        self.run(ReportKind::Campaigns, request).await
    }

    pub async fn ad_groups(
        &self,
        campaign_id: i64,
        request: &ReportRequest,
    ) -> Result<ReportingDataResponse, ApiError> {
        self.run(ReportKind::AdGroups { campaign_id }, request).await
    }

    pub async fn keywords(
        &self,
        campaign_id: i64,
        request: &ReportRequest,
    ) -> Result<ReportingDataResponse, ApiError> {
        self.run(ReportKind::Keywords { campaign_id }, request).await
    }

    pub async fn search_terms(
        &self,
        campaign_id: i64,
        request: &ReportRequest,
    ) -> Result<ReportingDataResponse, ApiError> {
        self.run(ReportKind::SearchTerms { campaign_id }, request).await
    }
}
