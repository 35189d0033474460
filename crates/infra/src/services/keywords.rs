//! Targeting keyword endpoints, scoped by campaign and ad group

use std::sync::Arc;

use searchads_core::Page;
use searchads_domain::{Keyword, KeywordUpdate, Selector};
use serde::de::IgnoredAny;

use super::{into_page, paged};
use crate::api::{ApiClient, ApiError};

pub struct KeywordService {
    client: Arc<ApiClient>,
}

impl KeywordService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn base(campaign_id: i64, ad_group_id: i64) -> String {
        format!("/campaigns/{campaign_id}/adgroups/{ad_group_id}/targetingkeywords")
    }

    pub async fn list(
        &self,
        campaign_id: i64,
        ad_group_id: i64,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Keyword>, ApiError> {
        let path = paged(&Self::base(campaign_id, ad_group_id), limit, offset);
        self.client.get(&path).await.map(into_page)
    }

    pub async fn get(
        &self,
        campaign_id: i64,
        ad_group_id: i64,
        keyword_id: i64,
    ) -> Result<Keyword, ApiError> {
        let path = format!("{}/{keyword_id}", Self::base(campaign_id, ad_group_id));
        self.client.get(&path).await?.require()
    }

    pub async fn find(
        &self,
        campaign_id: i64,
        ad_group_id: i64,
        selector: &Selector,
    ) -> Result<Page<Keyword>, ApiError> {
        let path = format!("{}/find", Self::base(campaign_id, ad_group_id));
        self.client.find(&path, selector).await.map(into_page)
    }

    pub async fn find_all(
        &self,
        campaign_id: i64,
        ad_group_id: i64,
        selector: &Selector,
    ) -> Result<Vec<Keyword>, ApiError> {
        let path = format!("{}/find", Self::base(campaign_id, ad_group_id));
        self.client.find_all(&path, selector).await
    }

    pub async fn create(
        &self,
        campaign_id: i64,
        ad_group_id: i64,
        keywords: &[Keyword],
    ) -> Result<Vec<Keyword>, ApiError> {
        let path = format!("{}/bulk", Self::base(campaign_id, ad_group_id));
        Ok(self.client.post(&path, keywords).await?.data.unwrap_or_default())
    }

    pub async fn update(
        &self,
        campaign_id: i64,
        ad_group_id: i64,
        updates: &[KeywordUpdate],
    ) -> Result<Vec<Keyword>, ApiError> {
        let path = format!("{}/bulk", Self::base(campaign_id, ad_group_id));
        Ok(self.client.put(&path, updates).await?.data.unwrap_or_default())
    }

    /// Bulk delete by id; the response body is ignored
    pub async fn delete(
        &self,
        campaign_id: i64,
        ad_group_id: i64,
        keyword_ids: &[i64],
    ) -> Result<(), ApiError> {
        let path = format!("{}/delete/bulk", Self::base(campaign_id, ad_group_id));
        self.client.post::<_, IgnoredAny>(&path, keyword_ids).await.map(|_| ())
    }
}
