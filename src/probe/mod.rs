//! Concurrent probing engine.
//!
//! # Data Flow
//! ```text
//! (base_url, candidates)
//!     → coordinator.rs (one task per candidate, optional in-flight cap)
//!         → worker.rs (GET base/candidate, retry transport errors)
//!             → fetcher.rs (HTTP seam; reqwest in production)
//!         → outcome.rs (exactly one ProbeOutcome per candidate)
//!     → mpsc channel sized for every outcome
//!     → scan driver drains N outcomes
//! ```
//!
//! # Design Decisions
//! - Only transport errors are retried by default; any response is final
//! - Channel capacity equals candidate count, so workers never block on send
//! - Cancellation and worker panics still produce an outcome

pub mod coordinator;
pub mod fetcher;
pub mod outcome;
pub mod worker;

#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::ProbeCoordinator;
pub use fetcher::{FetchError, Fetcher, ReqwestFetcher};
pub use outcome::{ProbeError, ProbeOutcome};
pub use worker::{compose_url, ProbeWorker};
