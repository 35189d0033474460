//! Request counters
//!
//! ## Design
//! - **Simple atomic counters** - No locking needed
//! - **Relaxed ordering** - Independent counters, no derived metrics

use std::sync::atomic::{AtomicU64, Ordering};

use searchads_core::{RequestEvent, RequestObserver, ResponseEvent};
use serde::Serialize;

/// Snapshot of request statistics at a point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RequestStats {
    /// Requests sent, retries included
    pub requests: u64,
    /// Responses received
    pub responses: u64,
    /// Responses with a non-2xx status
    pub failures: u64,
    /// HTTP 429 responses
    pub rate_limited: u64,
    /// Sum of response latencies in milliseconds
    pub total_latency_ms: u64,
}

/// Counts traffic seen by the executor
#[derive(Debug, Default)]
pub struct RequestMetrics {
    requests: AtomicU64,
    responses: AtomicU64,
    failures: AtomicU64,
    rate_limited: AtomicU64,
    total_latency_ms: AtomicU64,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RequestStats {
        // Relaxed OK: independent counters
        RequestStats {
            requests: self.requests.load(Ordering::Relaxed),
            responses: self.responses.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            rate_limited: self.rate_limited.load(Ordering::Relaxed),
            total_latency_ms: self.total_latency_ms.load(Ordering::Relaxed),
        }
    }
}

impl RequestObserver for RequestMetrics {
    fn on_request(&self, _event: &RequestEvent<'_>) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    fn on_response(&self, event: &ResponseEvent<'_>) {
        self.responses.fetch_add(1, Ordering::Relaxed);
        let latency = u64::try_from(event.elapsed.as_millis()).unwrap_or(u64::MAX);
        self.total_latency_ms.fetch_add(latency, Ordering::Relaxed);

        if !(200..300).contains(&event.status) {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
        if event.status == 429 {
            self.rate_limited.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn response(status: u16) -> ResponseEvent<'static> {
        ResponseEvent {
            method: "GET",
            url: "https://example.test/acls",
            status,
            elapsed: Duration::from_millis(10),
            body: b"",
        }
    }

    #[test]
    fn counts_failures_and_rate_limits() {
        let metrics = RequestMetrics::new();
        let request = RequestEvent { method: "GET", url: "https://example.test/acls", body: None };

        for status in [429, 429, 200, 500] {
            metrics.on_request(&request);
            metrics.on_response(&response(status));
        }

        let stats = metrics.snapshot();
        assert_eq!(stats.requests, 4);
        assert_eq!(stats.responses, 4);
        assert_eq!(stats.failures, 3);
        assert_eq!(stats.rate_limited, 2);
        assert_eq!(stats.total_latency_ms, 40);
    }
}
