//! Token and error types

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bearer token with an absolute expiry
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Create a token that expires `expires_in` from now
    #[must_use]
    pub fn new(value: impl Into<String>, expires_in: Duration) -> Self {
        let lifetime = chrono::Duration::from_std(expires_in).unwrap_or(chrono::Duration::MAX);
        let expires_at = Utc::now().checked_add_signed(lifetime).unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { value: value.into(), expires_at }
    }

    /// Check if the token is expired or will expire within `skew`
    #[must_use]
    pub fn is_expired(&self, skew: Duration) -> bool {
        let skew = chrono::Duration::from_std(skew).unwrap_or(chrono::Duration::MAX);
        match Utc::now().checked_add_signed(skew) {
            Some(deadline) => deadline >= self.expires_at,
            None => true,
        }
    }

    /// Get seconds until token expiration (negative once expired)
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }
}

// Keep the token value out of logs
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Credential acquisition failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token endpoint could not be reached
    #[error("token request failed: {0}")]
    Request(String),

    /// The token endpoint answered with a non-success status
    #[error("token endpoint rejected credentials (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    /// The token endpoint answered with an unreadable body
    #[error("invalid token response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_not_expired() {
        let token = AccessToken::new("abc", Duration::from_secs(3600));
        assert!(!token.is_expired(Duration::from_secs(60)));
        assert!(token.seconds_until_expiry() > 3500);
    }

    #[test]
    fn skew_pulls_expiry_forward() {
        let token = AccessToken::new("abc", Duration::from_secs(30));
        assert!(!token.is_expired(Duration::ZERO));
        assert!(token.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn past_expiry_is_expired() {
        let token = AccessToken {
            value: "abc".to_string(),
            expires_at: Utc::now() - chrono::Duration::seconds(5),
        };
        assert!(token.is_expired(Duration::ZERO));
        assert!(token.seconds_until_expiry() < 0);
    }

    #[test]
    fn debug_redacts_value() {
        let token = AccessToken::new("super-secret", Duration::from_secs(10));
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn serialized_token_keeps_expiry() {
        let token = AccessToken::new("abc", Duration::from_secs(3600));

        let wire = serde_json::to_string(&token).unwrap();
        let restored: AccessToken = serde_json::from_str(&wire).unwrap();

        assert_eq!(restored, token);
        assert!(!restored.is_expired(Duration::from_secs(60)));
    }
}
