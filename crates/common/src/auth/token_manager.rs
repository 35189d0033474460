//! Token manager with refresh-on-demand
//!
//! The cached token lives behind a single async mutex that is held for the
//! whole check-refresh-store sequence, so concurrent callers wait for one
//! refresh instead of racing their own.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use super::traits::TokenSource;
use super::types::{AccessToken, AuthError};

/// Default seconds before expiry at which a token is treated as stale
pub const DEFAULT_REFRESH_SKEW: Duration = Duration::from_secs(60);

/// Owns the cached access token for one set of credentials
pub struct TokenManager<S: TokenSource> {
    source: S,
    cached: Mutex<Option<AccessToken>>,
    refresh_skew: Duration,
}

impl<S: TokenSource> TokenManager<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source, cached: Mutex::new(None), refresh_skew: DEFAULT_REFRESH_SKEW }
    }

    #[must_use]
    pub fn with_refresh_skew(mut self, skew: Duration) -> Self {
        self.refresh_skew = skew;
        self
    }

    /// Get a valid access token, fetching a new one if needed
    ///
    /// # Errors
    /// Returns the source's `AuthError`; a failed fetch leaves the cache empty
    pub async fn get_access_token(&self) -> Result<String, AuthError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if !token.is_expired(self.refresh_skew) {
                return Ok(token.value.clone());
            }
            debug!(expires_at = %token.expires_at, "cached token is stale");
        }

        *cached = None;
        let fresh = self.source.fetch_token().await?;
        info!(expires_in_secs = fresh.seconds_until_expiry(), "acquired access token");

        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    /// Current token set (without refresh)
    pub async fn current_token(&self) -> Option<AccessToken> {
        self.cached.lock().await.clone()
    }

    /// Drop the cached token so the next call fetches a new one
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }
}
