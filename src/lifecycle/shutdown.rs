//! Cancellation of an in-progress run.

use std::sync::Arc;

use tokio::sync::watch;

/// Trigger side of the run-wide cancellation signal.
///
/// Cloning is cheap; every clone triggers the same signal. The coordinator
/// and each probe worker hold a [`ShutdownSignal`] obtained from
/// [`Shutdown::signal`].
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Obtain a receiver for the signal. Receivers created after the trigger
    /// observe it immediately.
    pub fn signal(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Cancel the run. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receive side of the cancellation signal.
#[derive(Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// A signal that never fires.
    pub fn never() -> Self {
        Shutdown::new().signal()
    }

    /// Resolve once the run is cancelled. Pends forever if the [`Shutdown`]
    /// is dropped without triggering.
    pub async fn cancelled(&mut self) {
        let closed = self.rx.wait_for(|cancelled| *cancelled).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}
