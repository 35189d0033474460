//! Observer port for the request executor
//!
//! The executor reports every outbound request and inbound response here.
//! Observers must not influence control flow.

use std::time::Duration;

/// Outbound request about to be sent
#[derive(Debug, Clone, Copy)]
pub struct RequestEvent<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub body: Option<&'a [u8]>,
}

/// Response received for a request
#[derive(Debug, Clone, Copy)]
pub struct ResponseEvent<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub status: u16,
    pub elapsed: Duration,
    pub body: &'a [u8],
}

/// Sink for request/response diagnostics
pub trait RequestObserver: Send + Sync {
    fn on_request(&self, event: &RequestEvent<'_>);

    fn on_response(&self, event: &ResponseEvent<'_>);
}

/// Observer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_request(&self, _event: &RequestEvent<'_>) {}

    fn on_response(&self, _event: &ResponseEvent<'_>) {}
}
