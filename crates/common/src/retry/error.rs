// Error types for retry module
use std::time::Duration;

use thiserror::Error;

/// Rejected retry strategy settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetryConfigError {
    #[error("max_attempts must be between {min} and {max}, got {actual}")]
    MaxAttemptsOutOfRange { min: u32, max: u32, actual: u32 },

    #[error("base_delay ({base:?}) cannot be greater than max_delay ({max:?})")]
    DelayOrder { base: Duration, max: Duration },
}
