//! Configuration structures
//!
//! A config file holds any number of named profiles; one of them is active
//! per invocation. Loading and probing live in `searchads-infra`.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_PROFILE, DEFAULT_SCOPE, DEFAULT_TIMEOUT, DEFAULT_TOKEN_URL,
};
use crate::errors::{Result, SearchAdsError};

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Profile used when none is requested explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,

    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Config {
    /// Resolve a profile by name, falling back to `default_profile` and then
    /// to the literal `"default"` profile.
    ///
    /// # Errors
    /// Returns `SearchAdsError::Config` if the resolved name has no entry.
    pub fn profile(&self, requested: Option<&str>) -> Result<&Profile> {
        let name = requested
            .or(self.default_profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE);

        self.profiles
            .get(name)
            .ok_or_else(|| SearchAdsError::Config(format!("profile '{name}' not found in config")))
    }
}

/// Credentials and endpoints for one organization
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub client_id: String,
    /// Pre-signed client assertion handed to the token endpoint
    pub client_secret: String,
    pub org_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Profile {
    /// Check that every required credential is present.
    ///
    /// # Errors
    /// Returns `SearchAdsError::Config` naming the first missing field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("org_id", &self.org_id),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(SearchAdsError::Config(format!("missing required setting: {name}")));
            }
        }
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn token_url(&self) -> &str {
        self.token_url.as_deref().unwrap_or(DEFAULT_TOKEN_URL)
    }

    pub fn scope(&self) -> &str {
        self.scope.as_deref().unwrap_or(DEFAULT_SCOPE)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs.map_or(DEFAULT_TIMEOUT, Duration::from_secs)
    }
}
