//! Campaign endpoints

use std::sync::Arc;

use searchads_core::Page;
use searchads_domain::{Campaign, CampaignUpdate, CampaignUpdateRequest, Selector};

use super::{into_page, paged};
use crate::api::{ApiClient, ApiError};

pub struct CampaignService {
    client: Arc<ApiClient>,
}

impl CampaignService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, limit: u32, offset: u32) -> Result<Page<Campaign>, ApiError> {
        self.client.get(&paged("/campaigns", limit, offset)).await.map(into_page)
    }

    pub async fn get(&self, campaign_id: i64) -> Result<Campaign, ApiError> {
        self.client.get(&format!("/campaigns/{campaign_id}")).await?.require()
    }

    pub async fn find(&self, selector: &Selector) -> Result<Page<Campaign>, ApiError> {
        self.client.find("/campaigns/find", selector).await.map(into_page)
    }

    pub async fn find_all(&self, selector: &Selector) -> Result<Vec<Campaign>, ApiError> {
        self.client.find_all("/campaigns/find", selector).await
    }

    pub async fn create(&self, campaign: &Campaign) -> Result<Campaign, ApiError> {
        self.client.post("/campaigns", campaign).await?.require()
    }

    /// Apply a partial update; the body is wrapped as `{"campaign": ...}`
    pub async fn update(
        &self,
        campaign_id: i64,
        update: CampaignUpdate,
    ) -> Result<Campaign, ApiError> {
        let body = CampaignUpdateRequest { campaign: update };
        self.client.put(&format!("/campaigns/{campaign_id}"), &body).await?.require()
    }

    pub async fn delete(&self, campaign_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/campaigns/{campaign_id}")).await
    }
}
