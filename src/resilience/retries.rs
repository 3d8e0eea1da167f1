//! Retry policy for a single probe.
//!
//! # Design Decisions
//! - Transport errors are retried while attempts remain
//! - Any response is terminal, except 5xx when `retry_on_server_error` is set
//! - No delay after the final attempt

use std::time::Duration;

use crate::config::{BackoffStrategy, RetryConfig};
use crate::resilience::backoff::calculate_backoff;

/// Attempt cap and delay schedule derived from [`RetryConfig`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
    strategy: BackoffStrategy,
    jitter: bool,
    retry_on_server_error: bool,
}

impl RetryPolicy {
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.base_delay_ms,
            max_delay_ms: config.max_delay_ms.max(config.base_delay_ms),
            strategy: config.strategy,
            jitter: config.jitter,
            retry_on_server_error: config.retry_on_server_error,
        }
    }

    /// Whether another attempt may follow attempt number `attempt` (1-based).
    pub fn has_attempts_left(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Whether a response with this status should be retried.
    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retry_on_server_error && (500..600).contains(&status)
    }

    /// Delay to wait after failed attempt number `attempt`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        calculate_backoff(
            self.strategy,
            attempt,
            self.base_delay_ms,
            self.max_delay_ms,
            self.jitter,
        )
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}
