//! Request Executor
//!
//! Sends JSON requests to the API, decodes the uniform response envelope
//! and maps every failure onto [`ApiError`]. Rate-limited calls are retried
//! with exponential backoff; nothing else is.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Method;
use searchads_common::RetryStrategy;
use searchads_core::{
    collect_all_pages, NoopObserver, Page, PageSource, RequestEvent, RequestObserver,
    ResponseEvent,
};
use searchads_domain::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ERROR_BODY_EXCERPT_CHARS};
use searchads_domain::{Envelope, ErrorDetail, PageInfo, Profile, Selector};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::auth::AuthTransport;
use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Per-call timeout
    pub timeout: Duration,
    /// Backoff applied to rate-limited calls
    pub retry: RetryStrategy,
    pub user_agent: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryStrategy::default(),
            user_agent: Some(concat!("searchads/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl ApiClientConfig {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            base_url: profile.base_url().to_string(),
            timeout: profile.timeout(),
            ..Self::default()
        }
    }
}

/// Decoded `data` plus pagination metadata of one response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// `None` for 204 responses, empty bodies and `null` data
    pub data: Option<T>,
    pub pagination: Option<PageInfo>,
}

impl<T> ApiResponse<T> {
    fn empty() -> Self {
        Self { data: None, pagination: None }
    }

    /// Take the decoded data or fail when the server returned none
    pub fn require(self) -> Result<T, ApiError> {
        self.data.ok_or_else(|| ApiError::Decoding("response carried no data".to_string()))
    }
}

/// API client executing authenticated JSON requests
pub struct ApiClient {
    http: HttpClient,
    auth: AuthTransport,
    config: ApiClientConfig,
    observer: Arc<dyn RequestObserver>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the HTTP client cannot be built
    pub fn new(config: ApiClientConfig, auth: AuthTransport) -> Result<Self, ApiError> {
        Self::builder().config(config).auth(auth).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Build a client for a validated profile using the OAuth transport
    pub fn from_profile(profile: &Profile) -> Result<Self, ApiError> {
        let auth = AuthTransport::from_profile(profile)?;
        Self::new(ApiClientConfig::from_profile(profile), auth)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.execute::<(), T>(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, path, Some(body)).await
    }

    /// DELETE a resource, discarding whatever the server returns
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<(), IgnoredAny>(Method::DELETE, path, None).await.map(|_| ())
    }

    /// Execute one logical call, retrying only on HTTP 429.
    ///
    /// The body is encoded once up front; every attempt sends the same
    /// bytes with a freshly decorated request.
    ///
    /// # Errors
    /// - `ApiError::Encoding` if the body cannot be serialized (nothing is sent)
    /// - `ApiError::Auth` if no access token is available
    /// - `ApiError::Transport` on network failure or timeout
    /// - `ApiError::Api` for non-2xx responses and error envelopes
    /// - `ApiError::Decoding` if the body does not match the expected shape
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn execute<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = body
            .map(|b| serde_json::to_vec(b))
            .transpose()
            .map_err(|e| ApiError::Encoding(e.to_string()))?;

        let url = format!("{}{}", self.config.base_url, path);
        let operation = format!("{method} {path}");

        let (result, metrics) = self
            .config
            .retry
            .execute_with_metrics(&operation, ApiError::is_rate_limited, || {
                self.send_once(&method, &url, payload.as_deref())
            })
            .await;

        if metrics.waits > 0 {
            debug!(%metrics, "request finished after rate-limit backoff");
        }

        result
    }

    /// Execute a find call for one page
    pub async fn find<T: DeserializeOwned>(
        &self,
        path: &str,
        selector: &Selector,
    ) -> Result<ApiResponse<Vec<T>>, ApiError> {
        self.post(path, selector).await
    }

    /// Execute a find call and follow pagination to the end
    pub async fn find_all<T>(&self, path: &str, selector: &Selector) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        collect_all_pages(&self.find_endpoint::<T>(path), selector).await
    }

    /// [`PageSource`] view of a find endpoint
    pub fn find_endpoint<'a, T>(&'a self, path: &'a str) -> FindEndpoint<'a, T> {
        FindEndpoint { client: self, path, _marker: PhantomData }
    }

    async fn send_once<T: DeserializeOwned>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&[u8]>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let mut request = self.http.request(method.clone(), url);
        if let Some(bytes) = body {
            request = request.body(bytes.to_vec());
        }
        let request = self.auth.decorate(request).await?;

        self.observer.on_request(&RequestEvent { method: method.as_str(), url, body });

        let started = Instant::now();
        let response = self.http.send(request).await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| ApiError::Transport(e.to_string()))?;

        self.observer.on_response(&ResponseEvent {
            method: method.as_str(),
            url,
            status,
            elapsed: started.elapsed(),
            body: &bytes,
        });

        decode_response(status, &bytes)
    }
}

/// Map a raw status and body onto the response contract
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
) -> Result<ApiResponse<T>, ApiError> {
    if status == 204 {
        return Ok(ApiResponse::empty());
    }

    if !(200..300).contains(&status) {
        let reported = serde_json::from_slice::<Envelope>(body)
            .ok()
            .and_then(|envelope| envelope.first_error().cloned());
        return Err(match reported {
            Some(detail) => api_error(status, detail),
            None => ApiError::Api {
                status,
                code: None,
                message: excerpt(&String::from_utf8_lossy(body), ERROR_BODY_EXCERPT_CHARS),
                field: None,
            },
        });
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ApiResponse::empty());
    }

    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|e| ApiError::Decoding(format!("parsing API response: {e}")))?;

    if let Some(detail) = envelope.first_error() {
        return Err(api_error(status, detail.clone()));
    }

    let data = match envelope.data {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            serde_json::from_value(value)
                .map_err(|e| ApiError::Decoding(format!("parsing response data: {e}")))?,
        ),
    };

    Ok(ApiResponse { data, pagination: envelope.pagination })
}

fn api_error(status: u16, detail: ErrorDetail) -> ApiError {
    let code = Some(detail.message_code).filter(|code| !code.is_empty());
    ApiError::Api { status, code, message: detail.message, field: detail.field }
}

/// First `max` characters of `text`, with `...` appended when cut
pub(crate) fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// A find endpoint addressed by path, fetched one page at a time
pub struct FindEndpoint<'a, T> {
    client: &'a ApiClient,
    path: &'a str,
    _marker: PhantomData<fn() -> T>,
}

#[async_trait]
impl<'a, T> PageSource<T> for FindEndpoint<'a, T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Error = ApiError;

    async fn fetch_page(&self, selector: &Selector) -> Result<Page<T>, ApiError> {
        let response = self.client.find::<T>(self.path, selector).await?;
        Ok(Page::new(response.data.unwrap_or_default(), response.pagination))
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    auth: Option<AuthTransport>,
    observer: Option<Arc<dyn RequestObserver>>,
}

impl ApiClientBuilder {
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.get_or_insert_with(ApiClientConfig::default).base_url = url.into();
        self
    }

    pub fn retry(mut self, retry: RetryStrategy) -> Self {
        self.config.get_or_insert_with(ApiClientConfig::default).retry = retry;
        self
    }

    pub fn auth(mut self, auth: AuthTransport) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// # Errors
    /// Returns `ApiError::Config` when no auth transport was supplied or the
    /// HTTP client cannot be built
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth = self
            .auth
            .ok_or_else(|| ApiError::Config("auth transport is required".to_string()))?;

        let mut http = HttpClient::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            http = http.user_agent(agent.clone());
        }

        Ok(ApiClient {
            http: http.build()?,
            auth,
            config,
            observer: self.observer.unwrap_or_else(|| Arc::new(NoopObserver)),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn no_content_decodes_to_empty() {
        let response = decode_response::<Vec<Item>>(204, b"").unwrap();
        assert_eq!(response, ApiResponse { data: None, pagination: None });
    }

    #[test]
    fn empty_success_body_has_no_data() {
        let response = decode_response::<Item>(200, b"  ").unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn null_data_is_none() {
        let response = decode_response::<Item>(200, br#"{"data":null}"#).unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn success_envelope_carries_pagination() {
        let body = json!({
            "data": [{"id": 1}, {"id": 2}],
            "pagination": {"totalResults": 2, "startIndex": 0, "itemsPerPage": 20}
        });
        let response =
            decode_response::<Vec<Item>>(200, body.to_string().as_bytes()).unwrap();

        assert_eq!(response.data, Some(vec![Item { id: 1 }, Item { id: 2 }]));
        assert_eq!(response.pagination.map(|p| p.total_results), Some(2));
    }

    #[test]
    fn error_envelope_on_failure_uses_first_error() {
        let body = json!({"data": null, "error": {"errors": [
            {"messageCode": "INVALID_INPUT", "message": "bad", "field": "name"},
            {"messageCode": "SECOND", "message": "ignored"}
        ]}});
        let err = decode_response::<Item>(400, body.to_string().as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "API error (HTTP 400) [INVALID_INPUT]: bad");
        match err {
            ApiError::Api { field, .. } => assert_eq!(field.as_deref(), Some("name")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_failure_body_is_excerpted() {
        let body = "x".repeat(800);
        let err = decode_response::<Item>(500, body.as_bytes()).unwrap_err();

        match &err {
            ApiError::Api { status: 500, code: None, message, .. } => {
                assert_eq!(message.len(), ERROR_BODY_EXCERPT_CHARS + 3);
                assert!(message.ends_with("..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_envelope_inside_success_is_an_error() {
        let body = json!({"error": {"errors": [{"messageCode": "NOT_FOUND", "message": "gone"}]}});
        let err = decode_response::<Item>(200, body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn mismatched_data_is_decoding_error() {
        let err = decode_response::<Item>(200, br#"{"data":{"id":"nope"}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));

        let err = decode_response::<Item>(200, b"<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo", 2), "hé...");
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("exact", 5), "exact");
    }
}
