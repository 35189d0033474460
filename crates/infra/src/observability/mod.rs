//! Request/response diagnostics
//!
//! Concrete [`RequestObserver`](searchads_core::RequestObserver)
//! implementations plugged into the executor:
//! - [`TracingObserver`] emits debug events with truncated bodies
//! - [`RequestMetrics`] counts requests, failures and rate limits
//!
//! Observers never influence control flow.

pub mod request_metrics;
pub mod tracing_observer;

pub use request_metrics::{RequestMetrics, RequestStats};
pub use tracing_observer::TracingObserver;
