use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use searchads_common::{AuthError, RetryStrategy};
use searchads_core::RequestObserver;
use searchads_infra::api::{AccessTokenProvider, ApiClient, ApiError, AuthTransport};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-access-token";
pub const TEST_ORG_ID: &str = "424242";

/// Token provider that hands out a fixed token and counts calls.
#[derive(Default)]
pub struct StaticToken {
    pub calls: AtomicUsize,
}

#[async_trait]
impl AccessTokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TEST_TOKEN.to_string())
    }
}

/// Token provider that always fails.
pub struct FailingToken;

#[async_trait]
impl AccessTokenProvider for FailingToken {
    async fn access_token(&self) -> Result<String, ApiError> {
        Err(ApiError::Auth(AuthError::Rejected { status: 400, body: "invalid_client".into() }))
    }
}

/// Backoff short enough to keep real-time tests fast.
pub fn fast_retry() -> RetryStrategy {
    RetryStrategy::default()
        .with_delays(Duration::from_millis(5), Duration::from_millis(20))
        .expect("valid delays")
}

pub fn client_with(
    server: &MockServer,
    tokens: Arc<dyn AccessTokenProvider>,
    observer: Option<Arc<dyn RequestObserver>>,
) -> ApiClient {
    let mut builder = ApiClient::builder()
        .base_url(server.uri())
        .retry(fast_retry())
        .auth(AuthTransport::new(tokens, TEST_ORG_ID));
    if let Some(observer) = observer {
        builder = builder.observer(observer);
    }
    builder.build().expect("api client should build")
}

/// Client authenticated with [`StaticToken`] and no observer.
pub fn test_client(server: &MockServer) -> ApiClient {
    client_with(server, Arc::new(StaticToken::default()), None)
}

/// Success envelope with optional pagination metadata.
pub fn envelope(data: Value, total: Option<u32>) -> Value {
    match total {
        Some(total) => json!({
            "data": data,
            "pagination": {"totalResults": total, "startIndex": 0, "itemsPerPage": 20}
        }),
        None => json!({ "data": data }),
    }
}

/// Failure envelope with a single error entry.
pub fn error_envelope(code: &str, message: &str) -> Value {
    json!({"data": null, "error": {"errors": [{"messageCode": code, "message": message}]}})
}
