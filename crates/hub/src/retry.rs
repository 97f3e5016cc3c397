//! Bounded retry with exponential backoff.
//!
//! [`RetryPolicy`] decides how many network attempts a send may make and
//! how long to wait between them. The delay doubles after each failed
//! attempt; no jitter is applied, so correlated failures retry on an
//! identical schedule (the integration suite pins the timing down).

use std::future::Future;
use std::time::Duration;

use crate::result::DeliveryResult;
use crate::transport::TransportError;

/// Tuning for the delivery retry loop.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of network attempts, the first try included.
    /// A ceiling of zero is treated as one.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles after each further failure.
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    /// Default attempt ceiling: one initial try plus one retry.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

    /// Default delay before the first retry.
    pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(300);

    /// Delay to sleep after the failed attempt numbered `attempt` (1-based).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.initial_backoff * 2u32.saturating_pow(attempt.saturating_sub(1))
    }

    /// Drive `attempt_fn` until it succeeds or the attempt ceiling is hit.
    ///
    /// The returned [`DeliveryResult`] reports the true attempt count and
    /// the *last* status and error observed, not an aggregate of every
    /// attempt. Exhaustion is a normal return value, never an error.
    pub async fn run<F, Fut>(&self, mut attempt_fn: F) -> DeliveryResult
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<u16, TransportError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut last_status = None;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match attempt_fn(attempt).await {
                Ok(status) => return DeliveryResult::delivered(attempt, status),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Hub delivery attempt failed");
                    last_status = e.status().or(last_status);
                    last_error = Some(e.to_string());
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.backoff_delay(attempt)).await;
            }
        }

        DeliveryResult::failed(max_attempts, last_status, last_error)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
