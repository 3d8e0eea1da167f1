//! OS signal handling.

use std::future::Future;
use std::io;

use crate::lifecycle::shutdown::Shutdown;

/// Exit status used when a second interrupt aborts the process.
pub const FORCED_EXIT_CODE: i32 = 130;

/// Spawn a task that cancels the run on the first Ctrl+C and exits the
/// process on the second.
///
/// After the first interrupt, in-flight probes finish as `Cancelled`
/// outcomes, so the scan still drains one outcome per candidate and the
/// sink keeps every hit found so far.
pub fn spawn_ctrl_c_handler(shutdown: Shutdown) -> tokio::task::JoinHandle<()> {
    tokio::spawn(watch_interrupts(shutdown, tokio::signal::ctrl_c, || {
        std::process::exit(FORCED_EXIT_CODE);
    }))
}

/// Trigger `shutdown` on the first interrupt and call `force_exit` on the
/// second. `next_interrupt` resolves once per interrupt.
pub async fn watch_interrupts<S, Fut, Q>(shutdown: Shutdown, mut next_interrupt: S, force_exit: Q)
where
    S: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
    Q: FnOnce(),
{
    if let Err(e) = next_interrupt().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::warn!("Interrupt received, cancelling in-flight probes (Ctrl+C again to quit)");
    shutdown.trigger();

    match next_interrupt().await {
        Ok(()) => {
            tracing::warn!("Second interrupt received, exiting");
            force_exit();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for a second Ctrl+C");
        }
    }
}
