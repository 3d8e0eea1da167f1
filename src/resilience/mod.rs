//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Probe attempt fails:
//!     → retries.rs (is another attempt allowed? is this failure retryable?)
//!     → backoff.rs (how long to wait before it)
//! ```
//!
//! # Design Decisions
//! - Retry constants are configuration, not hard-coded
//! - Delays run on the tokio clock so tests can pause time

pub mod backoff;
pub mod retries;

pub use retries::RetryPolicy;
