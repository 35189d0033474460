//! Auth Transport
//!
//! Obtains access tokens through the OAuth 2.0 client-credentials grant,
//! caches them in a [`TokenManager`], and decorates every outbound request
//! with the bearer token and the organization scope header.
//!
//! A 401 from the API is not treated specially here; it surfaces as an
//! ordinary `ApiError::Api`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use searchads_common::{AccessToken, AuthError, TokenManager, TokenSource};
use searchads_domain::constants::{ERROR_BODY_EXCERPT_CHARS, ORG_CONTEXT_HEADER};
use searchads_domain::Profile;
use serde::Deserialize;
use tracing::debug;

use super::client::excerpt;
use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token
    ///
    /// This method should handle token refresh if needed.
    async fn access_token(&self) -> Result<String, ApiError>;
}

#[async_trait]
impl<S: TokenSource> AccessTokenProvider for TokenManager<S> {
    async fn access_token(&self) -> Result<String, ApiError> {
        self.get_access_token().await.map_err(ApiError::from)
    }
}

/// OAuth client-credentials token source
pub struct OAuthTokenSource {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    scope: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    #[allow(dead_code)]
    token_type: Option<String>,
    expires_in: u64,
}

impl OAuthTokenSource {
    pub fn new(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        scope: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build token client: {e}")))?;

        Ok(Self {
            http,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: scope.into(),
        })
    }

    /// Build a token source from a profile's credentials and endpoints
    pub fn from_profile(profile: &Profile) -> Result<Self, ApiError> {
        Self::new(
            profile.token_url(),
            profile.client_id.clone(),
            profile.client_secret.clone(),
            profile.scope(),
            profile.timeout(),
        )
    }
}

#[async_trait]
impl TokenSource for OAuthTokenSource {
    async fn fetch_token(&self) -> Result<AccessToken, AuthError> {
        debug!(token_url = %self.token_url, "requesting access token");

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", self.scope.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AuthError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body: excerpt(&body, ERROR_BODY_EXCERPT_CHARS),
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        Ok(AccessToken::new(token.access_token, Duration::from_secs(token.expires_in)))
    }
}

/// Attaches credentials and org scope to outbound requests
#[derive(Clone)]
pub struct AuthTransport {
    tokens: Arc<dyn AccessTokenProvider>,
    org_id: String,
}

impl AuthTransport {
    pub fn new(tokens: Arc<dyn AccessTokenProvider>, org_id: impl Into<String>) -> Self {
        Self { tokens, org_id: org_id.into() }
    }

    /// Wire up the OAuth token source and cache for a profile
    pub fn from_profile(profile: &Profile) -> Result<Self, ApiError> {
        let source = OAuthTokenSource::from_profile(profile)?;
        Ok(Self::new(Arc::new(TokenManager::new(source)), profile.org_id.clone()))
    }

    /// Add `Authorization` and `X-AP-Context` headers, refreshing the token
    /// first when it is missing or stale.
    ///
    /// # Errors
    /// Returns `ApiError::Auth` when no token can be obtained
    pub async fn decorate(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.tokens.access_token().await?;
        Ok(request
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ORG_CONTEXT_HEADER, format!("orgId={}", self.org_id)))
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn source(server: &MockServer) -> OAuthTokenSource {
        OAuthTokenSource::new(
            format!("{}/auth/oauth2/token", server.uri()),
            "SEARCHADS.client-id",
            "signed-assertion",
            "searchadsorg",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn fetches_token_with_client_credentials_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/oauth2/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=SEARCHADS.client-id"))
            .and(body_string_contains("client_secret=signed-assertion"))
            .and(body_string_contains("scope=searchadsorg"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok-123",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token = source(&server).fetch_token().await.unwrap();

        assert_eq!(token.value, "tok-123");
        assert!(!token.is_expired(Duration::from_secs(60)));
    }

    #[tokio::test]
    async fn rejected_credentials_are_auth_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"invalid_client\"}"))
            .mount(&server)
            .await;

        let err = source(&server).fetch_token().await.unwrap_err();
        assert!(matches!(err, AuthError::Rejected { status: 401, .. }));
    }

    #[tokio::test]
    async fn rejected_body_is_cut_to_excerpt_length() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("x".repeat(2000)))
            .mount(&server)
            .await;

        let err = source(&server).fetch_token().await.unwrap_err();
        let AuthError::Rejected { status, body } = err else {
            panic!("expected rejected credentials");
        };
        assert_eq!(status, 400);
        assert_eq!(body.chars().count(), ERROR_BODY_EXCERPT_CHARS + 3);
        assert!(body.ends_with("..."));
    }

    #[tokio::test]
    async fn malformed_token_response_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = source(&server).fetch_token().await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn decorate_adds_bearer_and_org_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok-abc",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/acls"))
            .and(header("authorization", "Bearer tok-abc"))
            .and(header("x-ap-context", "orgId=42"))
            .respond_with(ResponseTemplate::new(200))
            .expect(2)
            .mount(&server)
            .await;

        let transport = AuthTransport::new(Arc::new(TokenManager::new(source(&server))), "42");
        let client = reqwest::Client::new();

        for _ in 0..2 {
            let request = transport
                .decorate(client.get(format!("{}/acls", server.uri())))
                .await
                .unwrap();
            let response = request.send().await.unwrap();
            assert_eq!(response.status().as_u16(), 200);
        }
    }

    #[tokio::test]
    async fn decorate_fails_when_token_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad"))
            .mount(&server)
            .await;

        let transport = AuthTransport::new(Arc::new(TokenManager::new(source(&server))), "42");
        let err = transport.decorate(reqwest::Client::new().get(server.uri())).await.unwrap_err();

        assert!(matches!(err, ApiError::Auth(AuthError::Rejected { status: 400, .. })));
    }
}
