// Retry strategy with exponential backoff
use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::retry::constants::{
    DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DELAY, MAX_BACKOFF_EXPONENT,
    MAX_MAX_ATTEMPTS, MIN_MAX_ATTEMPTS,
};
use crate::retry::error::RetryConfigError;
use crate::retry::metrics::RetryMetrics;

/// Type alias for retry result with metrics (clippy::type_complexity)
type RetryResultWithMetrics<T, E> = (Result<T, E>, RetryMetrics);

/// Bounded retry with exponential backoff.
///
/// After attempt `i` (0-indexed) fails with a retryable error and attempts
/// remain, the strategy waits `base_delay * 2^i` (capped at `max_delay`)
/// on the tokio timer. Errors the predicate rejects are returned at once.
/// When attempts run out the last error is returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryStrategy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl RetryStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a custom retry strategy with validation
    pub fn custom(
        max_attempts: u32,
        base_delay: Duration,
        max_delay: Duration,
    ) -> Result<Self, RetryConfigError> {
        Self::new().with_max_attempts(max_attempts)?.with_delays(base_delay, max_delay)
    }

    /// Set the maximum number of attempts with validation
    pub fn with_max_attempts(mut self, attempts: u32) -> Result<Self, RetryConfigError> {
        if !(MIN_MAX_ATTEMPTS..=MAX_MAX_ATTEMPTS).contains(&attempts) {
            return Err(RetryConfigError::MaxAttemptsOutOfRange {
                min: MIN_MAX_ATTEMPTS,
                max: MAX_MAX_ATTEMPTS,
                actual: attempts,
            });
        }
        self.max_attempts = attempts;
        Ok(self)
    }

    /// Set base delay and cap together
    pub fn with_delays(mut self, base: Duration, max: Duration) -> Result<Self, RetryConfigError> {
        if base > max {
            return Err(RetryConfigError::DelayOrder { base, max });
        }
        self.base_delay = base;
        self.max_delay = max;
        Ok(self)
    }

    /// Delay to wait after the given failed attempt (0-indexed)
    pub fn get_delay(&self, attempt: u32) -> Duration {
        let base_millis = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let max_millis = u64::try_from(self.max_delay.as_millis()).unwrap_or(u64::MAX);

        let exponent = attempt.min(MAX_BACKOFF_EXPONENT);
        let multiplier = 2_u64.saturating_pow(exponent);
        let delay_millis = base_millis.saturating_mul(multiplier).min(max_millis);

        Duration::from_millis(delay_millis)
    }

    /// Check if another attempt may follow the given attempt count
    pub fn should_retry(&self, attempts_made: u32) -> bool {
        attempts_made < self.max_attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Execute an operation with retry logic and metrics.
    ///
    /// `is_retryable` decides per error whether another attempt is made.
    pub async fn execute_with_metrics<F, Fut, T, E, P>(
        &self,
        operation_name: &str,
        is_retryable: P,
        mut operation: F,
    ) -> RetryResultWithMetrics<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
        P: Fn(&E) -> bool,
    {
        let mut metrics = RetryMetrics::new();

        loop {
            let attempt = metrics.attempts;
            metrics.attempts += 1;

            match operation().await {
                Ok(value) => {
                    metrics.succeeded = true;
                    if attempt > 0 {
                        debug!(
                            operation = operation_name,
                            attempts = metrics.attempts,
                            total_delay_ms = metrics.total_delay.as_millis() as u64,
                            "operation succeeded after retry"
                        );
                    }
                    return (Ok(value), metrics);
                }
                Err(err) if is_retryable(&err) && self.should_retry(metrics.attempts) => {
                    let delay = self.get_delay(attempt);
                    warn!(
                        operation = operation_name,
                        attempt = metrics.attempts,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retryable failure, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    metrics.waits += 1;
                    metrics.total_delay += delay;
                }
                Err(err) => {
                    if is_retryable(&err) {
                        warn!(
                            operation = operation_name,
                            attempts = metrics.attempts,
                            error = %err,
                            "retry attempts exhausted"
                        );
                    }
                    return (Err(err), metrics);
                }
            }
        }
    }

    /// Execute an operation with retry logic
    pub async fn execute<F, Fut, T, E, P>(&self, is_retryable: P, operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
        P: Fn(&E) -> bool,
    {
        let (result, _) = self.execute_with_metrics("unnamed", is_retryable, operation).await;
        result
    }
}
