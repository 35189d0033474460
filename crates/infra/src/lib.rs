//! # SearchAds Infrastructure
//!
//! Implementations of the request pipeline and its I/O.
//!
//! This crate contains:
//! - HTTP client construction
//! - Auth Transport and the Request Executor (`api`)
//! - Config file and environment loading
//! - Typed resource services
//! - Request observers for verbose logging and counters
//!
//! ## Architecture
//! - Implements traits defined in `searchads-core`
//! - Depends on `searchads-common` for retry and token caching
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod http;
pub mod observability;
pub mod services;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError, ApiResponse, AuthTransport};
pub use config::{load, LoadOptions};
pub use http::*;
pub use observability::{RequestMetrics, TracingObserver};
pub use services::*;
