//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Probe workers, coordinator, scan driver produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stderr (fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! Console result lines ("Directory found: ...") are not logs; they are
//! written by the scan driver to its output stream.

pub mod logging;
pub mod metrics;
