//! Negative keyword endpoints
//!
//! The same operations exist at campaign and ad-group level; a
//! [`NegativeKeywordScope`] picks the path prefix.

use std::sync::Arc;

use searchads_core::Page;
use searchads_domain::{NegativeKeyword, Selector};
use serde::de::IgnoredAny;

use super::{into_page, paged};
use crate::api::{ApiClient, ApiError};

/// Where a negative keyword list lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativeKeywordScope {
    Campaign { campaign_id: i64 },
    AdGroup { campaign_id: i64, ad_group_id: i64 },
}

impl NegativeKeywordScope {
    /// Ad-group scope when an ad group id is given, campaign scope otherwise
    pub fn new(campaign_id: i64, ad_group_id: Option<i64>) -> Self {
        match ad_group_id {
            Some(ad_group_id) => Self::AdGroup { campaign_id, ad_group_id },
            None => Self::Campaign { campaign_id },
        }
    }

    fn base(&self) -> String {
        match self {
            Self::Campaign { campaign_id } => format!("/campaigns/{campaign_id}/negativekeywords"),
            Self::AdGroup { campaign_id, ad_group_id } => {
                format!("/campaigns/{campaign_id}/adgroups/{ad_group_id}/negativekeywords")
            }
        }
    }
}

pub struct NegativeKeywordService {
    client: Arc<ApiClient>,
}

impl NegativeKeywordService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        scope: NegativeKeywordScope,
        limit: u32,
        offset: u32,
    ) -> Result<Page<NegativeKeyword>, ApiError> {
        self.client.get(&paged(&scope.base(), limit, offset)).await.map(into_page)
    }

    pub async fn get(
        &self,
        scope: NegativeKeywordScope,
        keyword_id: i64,
    ) -> Result<NegativeKeyword, ApiError> {
        self.client.get(&format!("{}/{keyword_id}", scope.base())).await?.require()
    }

    pub async fn find(
        &self,
        scope: NegativeKeywordScope,
        selector: &Selector,
    ) -> Result<Page<NegativeKeyword>, ApiError> {
        self.client.find(&format!("{}/find", scope.base()), selector).await.map(into_page)
    }

    pub async fn find_all(
        &self,
        scope: NegativeKeywordScope,
        selector: &Selector,
    ) -> Result<Vec<NegativeKeyword>, ApiError> {
        self.client.find_all(&format!("{}/find", scope.base()), selector).await
    }

    pub async fn create(
        &self,
        scope: NegativeKeywordScope,
        keywords: &[NegativeKeyword],
    ) -> Result<Vec<NegativeKeyword>, ApiError> {
        let path = format!("{}/bulk", scope.base());
        Ok(self.client.post(&path, keywords).await?.data.unwrap_or_default())
    }

    pub async fn delete(
        &self,
        scope: NegativeKeywordScope,
        keyword_ids: &[i64],
    ) -> Result<(), ApiError> {
        let path = format!("{}/delete/bulk", scope.base());
        self.client.post::<_, IgnoredAny>(&path, keyword_ids).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_selects_path_prefix() {
        assert_eq!(NegativeKeywordScope::new(7, None).base(), "/campaigns/7/negativekeywords");
        assert_eq!(
            NegativeKeywordScope::new(7, Some(9)).base(),
            "/campaigns/7/adgroups/9/negativekeywords"
        );
    }
}
