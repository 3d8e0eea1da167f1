//! Fan-out of probe workers and fan-in of their outcomes.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures_util::FutureExt;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;
use crate::probe::fetcher::Fetcher;
use crate::probe::outcome::{ProbeError, ProbeOutcome};
use crate::probe::worker::{compose_url, ProbeWorker};

/// Runs one [`ProbeWorker`] task per candidate.
pub struct ProbeCoordinator<F> {
    worker: Arc<ProbeWorker<F>>,
    limiter: Option<Arc<Semaphore>>,
    max_in_flight: usize,
}

impl<F: Fetcher> ProbeCoordinator<F> {
    /// `max_in_flight` caps concurrent probes; 0 means unbounded.
    pub fn new(worker: ProbeWorker<F>, max_in_flight: usize) -> Self {
        Self {
            worker: Arc::new(worker),
            limiter: (max_in_flight > 0).then(|| Arc::new(Semaphore::new(max_in_flight))),
            max_in_flight,
        }
    }

    pub fn worker(&self) -> &ProbeWorker<F> {
        &self.worker
    }

    /// Probe every candidate and return the outcome stream.
    ///
    /// Returns after all workers finished; the receiver then holds exactly
    /// one outcome per candidate, in arrival order, and is closed.
    pub async fn run(
        &self,
        base_url: &str,
        candidates: Vec<String>,
        shutdown: ShutdownSignal,
    ) -> mpsc::Receiver<ProbeOutcome> {
        let total = candidates.len();
        // Room for every outcome so producers never wait on the consumer.
        let (tx, rx) = mpsc::channel(total.max(1));
        let base_url: Arc<str> = Arc::from(base_url);

        tracing::info!(
            candidates = total,
            max_in_flight = self.max_in_flight,
            "Dispatching probes"
        );

        let mut tasks = JoinSet::new();
        for candidate in candidates {
            let worker = self.worker.clone();
            let limiter = self.limiter.clone();
            let base_url = base_url.clone();
            let tx = tx.clone();
            let shutdown = shutdown.clone();

            tasks.spawn(async move {
                let started = Instant::now();
                let outcome = probe_one(&worker, limiter, &base_url, &candidate, shutdown).await;
                metrics::record_outcome(outcome.tag(), started);

                // Capacity covers every candidate, so this never waits.
                if tx.send(outcome).await.is_err() {
                    tracing::warn!("Outcome receiver dropped before probe finished");
                }
            });
        }
        drop(tx);

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Probe task failed to complete");
            }
        }

        tracing::debug!(candidates = total, "All probes finished");
        rx
    }
}

/// Wait for a slot, then run the worker. Cancellation while waiting and a
/// panicking worker both still yield an outcome.
async fn probe_one<F: Fetcher>(
    worker: &ProbeWorker<F>,
    limiter: Option<Arc<Semaphore>>,
    base_url: &str,
    candidate: &str,
    mut shutdown: ShutdownSignal,
) -> ProbeOutcome {
    let _permit = match limiter {
        Some(limiter) => tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                return ProbeOutcome::failed(compose_url(base_url, candidate), ProbeError::Cancelled);
            }
            permit = limiter.acquire_owned() => permit.ok(),
        },
        None => None,
    };

    let probe = worker.probe(base_url, candidate, shutdown);
    match AssertUnwindSafe(probe).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(_) => {
            let url = compose_url(base_url, candidate);
            tracing::error!(url = %url, "Probe worker panicked");
            ProbeOutcome::failed(
                url,
                ProbeError::TransportFailure("probe worker panicked".into()),
            )
        }
    }
}
