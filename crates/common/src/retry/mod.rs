// Retry module with exponential backoff

pub mod constants;
pub mod error;
pub mod metrics;
pub mod strategy;

pub use error::RetryConfigError;
pub use metrics::RetryMetrics;
pub use strategy::RetryStrategy;
