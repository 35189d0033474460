// Metrics for retry operations
use std::fmt;
use std::time::Duration;

/// Metrics collected during retry operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryMetrics {
    /// Number of attempts made
    pub attempts: u32,
    /// Number of backoff waits taken between attempts
    pub waits: u32,
    /// Total delay accumulated across all retries
    pub total_delay: Duration,
    /// Whether the operation ultimately succeeded
    pub succeeded: bool,
}

impl RetryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the average delay between attempts
    pub fn average_delay(&self) -> Option<Duration> {
        if self.waits == 0 {
            None
        } else {
            Some(self.total_delay / self.waits)
        }
    }
}

impl fmt::Display for RetryMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RetryMetrics {{ attempts: {}, waits: {}, total_delay: {:?}, succeeded: {} }}",
            self.attempts, self.waits, self.total_delay, self.succeeded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_delay_needs_a_wait() {
        assert_eq!(RetryMetrics::new().average_delay(), None);

        let metrics = RetryMetrics {
            attempts: 3,
            waits: 2,
            total_delay: Duration::from_secs(6),
            succeeded: true,
        };
        assert_eq!(metrics.average_delay(), Some(Duration::from_secs(3)));
    }
}
