//! Backoff delay calculation with optional jitter.

use std::time::Duration;

use rand::Rng;

use crate::config::BackoffStrategy;

/// Calculate the delay to wait after failed attempt number `attempt` (1-based).
///
/// `Fixed` always waits `base_ms`; `Exponential` doubles per attempt. Both are
/// capped at `max_ms` (before jitter).
pub fn calculate_backoff(
    strategy: BackoffStrategy,
    attempt: u32,
    base_ms: u64,
    max_ms: u64,
    jitter: bool,
) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let delay_ms = match strategy {
        BackoffStrategy::Fixed => base_ms,
        BackoffStrategy::Exponential => {
            let exponential_base = 2u64.saturating_pow(attempt - 1);
            base_ms.saturating_mul(exponential_base)
        }
    };
    let capped_delay = delay_ms.min(max_ms);

    // 0 to 10% of the delay
    let jitter_range = capped_delay / 10;
    let jitter = if jitter && jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped_delay + jitter)
}
