//! Runtime building blocks shared across SearchAds crates.
//!
//! # Feature Tiers
//!
//! Every module is compiled only with `runtime`. The lower tiers exist to
//! group dependencies and expose no items on their own:
//! - `foundation`: serde, thiserror and chrono
//! - `observability`: tracing
//! - `runtime`: both of the above plus tokio and async-trait; enables the
//!   token cache and retry policy

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod auth;
#[cfg(feature = "runtime")]
pub mod retry;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use auth::{AccessToken, AuthError, TokenManager, TokenSource};
#[cfg(feature = "runtime")]
pub use retry::{RetryConfigError, RetryMetrics, RetryStrategy};
