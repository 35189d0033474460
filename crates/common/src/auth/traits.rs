//! Traits for credential acquisition
//!
//! Abstracts the token endpoint so the cache can be tested without HTTP.

use async_trait::async_trait;

use super::types::{AccessToken, AuthError};

/// Something that can mint a fresh access token
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Request a new token from the issuer
    ///
    /// # Errors
    /// Returns `AuthError` if the issuer is unreachable or rejects the
    /// credentials
    async fn fetch_token(&self) -> Result<AccessToken, AuthError>;
}
