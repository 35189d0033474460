//! API-specific error types
//!
//! Classifies every failure the request pipeline can produce. Only
//! rate-limit responses are retried; everything else propagates.

use std::fmt;

use searchads_common::AuthError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Request body could not be serialized - non-retryable
    Encoding,
    /// Network/connection errors - propagated as-is
    Transport,
    /// Response shape mismatch - non-retryable
    Decoding,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server-reported business or validation failure - non-retryable
    Api,
    /// Credential acquisition errors - non-retryable
    Authentication,
    /// Client construction errors - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to encode request body: {0}")]
    Encoding(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decoding(String),

    #[error("{}", ApiFailure { status: *status, code: code.as_deref(), message })]
    Api { status: u16, code: Option<String>, message: String, field: Option<String> },

    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Encoding(_) => ApiErrorCategory::Encoding,
            Self::Transport(_) => ApiErrorCategory::Transport,
            Self::Decoding(_) => ApiErrorCategory::Decoding,
            Self::Api { status: 429, .. } => ApiErrorCategory::RateLimit,
            Self::Api { .. } => ApiErrorCategory::Api,
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// True only for HTTP 429 responses
    pub fn is_rate_limited(&self) -> bool {
        self.category() == ApiErrorCategory::RateLimit
    }

    /// HTTP status for server-reported failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decoding(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Display helper for [`ApiError::Api`]
struct ApiFailure<'a> {
    status: u16,
    code: Option<&'a str>,
    message: &'a str,
}

impl fmt::Display for ApiFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "API error (HTTP {}) [{}]: {}", self.status, code, self.message),
            None => write!(f, "API error (HTTP {}): {}", self.status, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> ApiError {
        ApiError::Api { status, code: None, message: "boom".to_string(), field: None }
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ApiError::Encoding("x".into()).category(), ApiErrorCategory::Encoding);
        assert_eq!(ApiError::Transport("x".into()).category(), ApiErrorCategory::Transport);
        assert_eq!(ApiError::Decoding("x".into()).category(), ApiErrorCategory::Decoding);
        assert_eq!(api(429).category(), ApiErrorCategory::RateLimit);
        assert_eq!(api(400).category(), ApiErrorCategory::Api);
        assert_eq!(api(503).category(), ApiErrorCategory::Api);
        assert_eq!(
            ApiError::Auth(AuthError::Request("down".into())).category(),
            ApiErrorCategory::Authentication
        );
    }

    #[test]
    fn test_only_429_is_rate_limited() {
        assert!(api(429).is_rate_limited());
        assert!(!api(500).is_rate_limited());
        assert!(!api(401).is_rate_limited());
        assert!(!ApiError::Transport("reset".into()).is_rate_limited());
    }

    #[test]
    fn test_api_error_display() {
        let coded = ApiError::Api {
            status: 400,
            code: Some("INVALID_INPUT".to_string()),
            message: "name is required".to_string(),
            field: Some("name".to_string()),
        };
        assert_eq!(coded.to_string(), "API error (HTTP 400) [INVALID_INPUT]: name is required");
        assert_eq!(api(502).to_string(), "API error (HTTP 502): boom");
        assert_eq!(coded.status(), Some(400));
    }
}
