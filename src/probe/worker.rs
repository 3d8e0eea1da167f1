//! Single-candidate probe with bounded retries.

use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;
use crate::probe::fetcher::Fetcher;
use crate::probe::outcome::{ProbeError, ProbeOutcome};
use crate::resilience::RetryPolicy;

/// Build the URL tested for `candidate`: `base_url + "/" + candidate`, verbatim.
pub fn compose_url(base_url: &str, candidate: &str) -> String {
    format!("{}/{}", base_url, candidate)
}

/// Probes one URL at a time through a [`Fetcher`].
pub struct ProbeWorker<F> {
    fetcher: F,
    policy: RetryPolicy,
}

impl<F: Fetcher> ProbeWorker<F> {
    pub fn new(fetcher: F, policy: RetryPolicy) -> Self {
        Self { fetcher, policy }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Probe `candidate` under `base_url`, producing exactly one outcome.
    ///
    /// Only transport errors (and 5xx, if the policy allows) are retried. A
    /// 200 or any other status ends the probe at once.
    pub async fn probe(
        &self,
        base_url: &str,
        candidate: &str,
        mut shutdown: ShutdownSignal,
    ) -> ProbeOutcome {
        let url = compose_url(base_url, candidate);
        tracing::debug!(url = %url, "Checking directory");

        match self.attempt_until_done(&url, &mut shutdown).await {
            None => ProbeOutcome::hit(url),
            Some(error) => ProbeOutcome::failed(url, error),
        }
    }

    async fn attempt_until_done(
        &self,
        url: &str,
        shutdown: &mut ShutdownSignal,
    ) -> Option<ProbeError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            metrics::record_attempt();

            let result = tokio::select! {
                biased;
                _ = shutdown.cancelled() => return Some(ProbeError::Cancelled),
                result = self.fetcher.fetch_status(url) => result,
            };

            match result {
                Ok(200) => return None,
                Ok(status)
                    if self.policy.is_retryable_status(status)
                        && self.policy.has_attempts_left(attempt) =>
                {
                    tracing::debug!(url = %url, attempt, status, "Server error, retrying");
                }
                Ok(status) => return Some(ProbeError::StatusFailure(status)),
                Err(e) if !e.is_retryable() => {
                    return Some(ProbeError::TransportFailure(e.to_string()));
                }
                Err(e) if !self.policy.has_attempts_left(attempt) => {
                    tracing::debug!(url = %url, attempt, error = %e, "Final attempt failed");
                    return Some(ProbeError::ExhaustedRetries {
                        attempts: attempt,
                        last_error: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!(url = %url, attempt, error = %e, "Attempt failed, retrying");
                }
            }

            let delay = self.policy.delay_after(attempt);
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => return Some(ProbeError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}
