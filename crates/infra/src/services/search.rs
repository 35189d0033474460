//! App and geo search endpoints
//!
//! Query values are percent-encoded before being placed in the path.

use std::sync::Arc;

use searchads_core::Page;
use searchads_domain::{AppInfo, GeoEntity};
use urlencoding::encode;

use super::into_page;
use crate::api::{ApiClient, ApiError};

pub struct SearchService {
    client: Arc<ApiClient>,
}

impl SearchService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn apps(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
        owned_only: bool,
    ) -> Result<Page<AppInfo>, ApiError> {
        let path = apps_path(query, limit, offset, owned_only);
        self.client.get(&path).await.map(into_page)
    }

    pub async fn geo(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
        entity: Option<&str>,
        country_code: Option<&str>,
    ) -> Result<Page<GeoEntity>, ApiError> {
        let path = geo_path(query, limit, offset, entity, country_code);
        self.client.get(&path).await.map(into_page)
    }
}

fn apps_path(query: &str, limit: u32, offset: u32, owned_only: bool) -> String {
    format!(
        "/search/apps?query={}&limit={limit}&offset={offset}&returnOwnedApps={owned_only}",
        encode(query)
    )
}

fn geo_path(
    query: &str,
    limit: u32,
    offset: u32,
    entity: Option<&str>,
    country_code: Option<&str>,
) -> String {
    let mut path = format!("/search/geo?query={}&limit={limit}&offset={offset}", encode(query));
    if let Some(entity) = entity.filter(|e| !e.is_empty()) {
        path.push_str(&format!("&entity={}", encode(entity)));
    }
    if let Some(code) = country_code.filter(|c| !c.is_empty()) {
        path.push_str(&format!("&countrycode={}", encode(code)));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apps_query_is_encoded() {
        assert_eq!(
            apps_path("photo & video", 20, 0, true),
            "/search/apps?query=photo%20%26%20video&limit=20&offset=0&returnOwnedApps=true"
        );
    }

    #[test]
    fn geo_optional_params_are_appended_only_when_set() {
        assert_eq!(geo_path("new york", 5, 10, None, None), "/search/geo?query=new%20york&limit=5&offset=10");
        assert_eq!(
            geo_path("ca", 5, 0, Some("AdminArea"), Some("US")),
            "/search/geo?query=ca&limit=5&offset=0&entity=AdminArea&countrycode=US"
        );
        assert_eq!(geo_path("ca", 5, 0, Some(""), None), "/search/geo?query=ca&limit=5&offset=0");
    }
}
