//! Verbose request logging

use searchads_core::{RequestEvent, RequestObserver, ResponseEvent};
use searchads_domain::constants::VERBOSE_BODY_EXCERPT_CHARS;
use tracing::debug;

use crate::api::client::excerpt;

/// Logs every request and response at debug level.
///
/// Response bodies are cut to `VERBOSE_BODY_EXCERPT_CHARS` characters.
/// Request bodies are logged whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl RequestObserver for TracingObserver {
    fn on_request(&self, event: &RequestEvent<'_>) {
        match event.body {
            Some(body) => debug!(
                target: "searchads::http",
                method = event.method,
                url = event.url,
                body = %String::from_utf8_lossy(body),
                "> request"
            ),
            None => debug!(target: "searchads::http", method = event.method, url = event.url, "> request"),
        }
    }

    fn on_response(&self, event: &ResponseEvent<'_>) {
        let body = excerpt(&String::from_utf8_lossy(event.body), VERBOSE_BODY_EXCERPT_CHARS);
        debug!(
            target: "searchads::http",
            method = event.method,
            url = event.url,
            status = event.status,
            elapsed_ms = event.elapsed.as_millis() as u64,
            body = %body,
            "< response"
        );
    }
}
