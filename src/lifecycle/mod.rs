//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     first SIGINT (Ctrl+C) → Shutdown::trigger
//!     second SIGINT → process exit (status 130)
//!
//! Shutdown (shutdown.rs):
//!     trigger → ShutdownSignal held by coordinator and every worker
//!     → pending and in-flight probes resolve as Cancelled outcomes
//! ```
//!
//! # Design Decisions
//! - Cancellation never drops an outcome; the scan still drains N results
//! - Backed by a watch channel so late subscribers see an earlier trigger

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownSignal};
