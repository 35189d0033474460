//! Ad group endpoints, scoped by campaign

use std::sync::Arc;

use searchads_core::Page;
use searchads_domain::{AdGroup, AdGroupUpdate, Selector};

use super::{into_page, paged};
use crate::api::{ApiClient, ApiError};

pub struct AdGroupService {
    client: Arc<ApiClient>,
}

impl AdGroupService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn base(campaign_id: i64) -> String {
        format!("/campaigns/{campaign_id}/adgroups")
    }

    pub async fn list(
        &self,
        campaign_id: i64,
        limit: u32,
        offset: u32,
    ) -> Result<Page<AdGroup>, ApiError> {
        self.client.get(&paged(&Self::base(campaign_id), limit, offset)).await.map(into_page)
    }

    pub async fn get(&self, campaign_id: i64, ad_group_id: i64) -> Result<AdGroup, ApiError> {
        let path = format!("{}/{ad_group_id}", Self::base(campaign_id));
        self.client.get(&path).await?.require()
    }

    pub async fn find(
        &self,
        campaign_id: i64,
        selector: &Selector,
    ) -> Result<Page<AdGroup>, ApiError> {
        let path = format!("{}/find", Self::base(campaign_id));
        self.client.find(&path, selector).await.map(into_page)
    }

    pub async fn find_all(
        &self,
        campaign_id: i64,
        selector: &Selector,
    ) -> Result<Vec<AdGroup>, ApiError> {
        let path = format!("{}/find", Self::base(campaign_id));
        self.client.find_all(&path, selector).await
    }

    pub async fn create(&self, campaign_id: i64, ad_group: &AdGroup) -> Result<AdGroup, ApiError> {
        self.client.post(&Self::base(campaign_id), ad_group).await?.require()
    }

    /// Ad group updates are sent bare, without a wrapper object
    pub async fn update(
        &self,
        campaign_id: i64,
        ad_group_id: i64,
        update: &AdGroupUpdate,
    ) -> Result<AdGroup, ApiError> {
        let path = format!("{}/{ad_group_id}", Self::base(campaign_id));
        self.client.put(&path, update).await?.require()
    }

    pub async fn delete(&self, campaign_id: i64, ad_group_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{ad_group_id}", Self::base(campaign_id))).await
    }
}
