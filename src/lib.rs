//! Concurrent HTTP path prober library.
//!
//! # Architecture Overview
//!
//! ```text
//!   candidates file ──▶ candidates ──┐
//!                                    ▼
//!   base URL ─────────────────▶ probe::ProbeCoordinator
//!                                    │  one task per candidate
//!                     ┌──────────────┼──────────────┐
//!                     ▼              ▼              ▼
//!               ProbeWorker     ProbeWorker     ProbeWorker   (retry + backoff)
//!                     │              │              │
//!                     └──────▶ mpsc channel ◀───────┘
//!                                    │  exactly N outcomes
//!                                    ▼
//!                         scan (single consumer)
//!                           ├─▶ console lines
//!                           └─▶ sink (append confirmed hits)
//! ```
//!
//! Cross-cutting: `config`, `lifecycle` (cancellation), `observability`
//! (tracing + metrics), `resilience` (retry policy, backoff).

pub mod candidates;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod probe;
pub mod report;
pub mod resilience;
pub mod scan;
pub mod sink;

pub use config::ProbeConfig;
pub use lifecycle::Shutdown;
pub use probe::{ProbeCoordinator, ProbeOutcome, ProbeWorker};
pub use report::ScanSummary;
