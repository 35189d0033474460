//! Access control list and org currency lookup

use std::sync::Arc;

use searchads_domain::constants::DEFAULT_CURRENCY;
use searchads_domain::UserAcl;
use tracing::warn;

use crate::api::{ApiClient, ApiError};

pub struct AclService {
    client: Arc<ApiClient>,
}

impl AclService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Organizations and roles visible to the current credentials
    pub async fn list(&self) -> Result<Vec<UserAcl>, ApiError> {
        Ok(self.client.get("/acls").await?.data.unwrap_or_default())
    }

    /// Currency of the org `org_id`
    ///
    /// Falls back to `DEFAULT_CURRENCY` when no ACL entry matches.
    pub async fn resolve_currency(&self, org_id: &str) -> Result<String, ApiError> {
        let acls = self.list().await?;
        Ok(currency_for(&acls, org_id))
    }
}

fn currency_for(acls: &[UserAcl], org_id: &str) -> String {
    let found = acls
        .iter()
        .find(|acl| acl.org_id.to_string() == org_id.trim())
        .map(|acl| acl.currency.clone())
        .filter(|currency| !currency.is_empty());

    found.unwrap_or_else(|| {
        warn!(org_id, fallback = DEFAULT_CURRENCY, "no ACL entry for org, using default currency");
        DEFAULT_CURRENCY.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acl(org_id: i64, currency: &str) -> UserAcl {
        UserAcl { org_id, currency: currency.to_string(), ..Default::default() }
    }

    #[test]
    fn picks_matching_org_currency() {
        let acls = [acl(1, "EUR"), acl(2, "GBP")];
        assert_eq!(currency_for(&acls, "2"), "GBP");
    }

    #[test]
    fn unknown_org_falls_back_to_default() {
        assert_eq!(currency_for(&[acl(1, "EUR")], "99"), DEFAULT_CURRENCY);
        assert_eq!(currency_for(&[], "1"), DEFAULT_CURRENCY);
    }
}
