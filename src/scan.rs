//! Scan driver: load candidates, run the coordinator, drain outcomes.
//!
//! The drain loop is the only writer of the hit sink and of the console
//! stream, so neither needs locking.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::candidates::{self, InputFileError};
use crate::config::{validate_config, ConfigError, ProbeConfig, ValidationError};
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;
use crate::probe::{Fetcher, ProbeCoordinator, ProbeWorker};
use crate::report::{outcome_line, ScanSummary};
use crate::resilience::RetryPolicy;
use crate::sink::HitSink;

/// Failures that abort a scan before any probe runs.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputFileError),
}

/// Run a complete scan described by `config`.
///
/// Writes one line per outcome (and a final summary) to `out`, appends
/// confirmed hits to the configured hits file and returns the totals.
/// Per-candidate failures and sink write failures never abort the scan.
pub async fn run<F, W>(
    config: &ProbeConfig,
    fetcher: F,
    shutdown: ShutdownSignal,
    out: &mut W,
) -> Result<ScanSummary, ScanError>
where
    F: Fetcher,
    W: Write,
{
    validate_config(config).map_err(ConfigError::Validation)?;
    let Some(base_url) = config.target.base_url.as_deref() else {
        return Err(ConfigError::Validation(vec![ValidationError::MissingBaseUrl]).into());
    };

    tracing::info!(base_url = %base_url, "Starting scan");
    let candidates_file = Path::new(&config.target.candidates_file);
    tracing::info!(path = %candidates_file.display(), "Reading candidates");
    let candidates = candidates::load(candidates_file).await?;
    tracing::info!(count = candidates.len(), "Candidates loaded");
    tracing::debug!(candidates = ?candidates, "Candidates to check");

    let worker = ProbeWorker::new(fetcher, RetryPolicy::from_config(&config.retries));
    let coordinator = ProbeCoordinator::new(worker, config.concurrency.max_in_flight);
    let sink = HitSink::new(&config.output.hits_file);

    let mut outcomes = coordinator.run(base_url, candidates, shutdown).await;

    let mut summary = ScanSummary::default();
    while let Some(outcome) = outcomes.recv().await {
        summary.record(&outcome);
        emit(out, &outcome_line(&outcome));

        if !outcome.is_hit() {
            continue;
        }
        match sink.append(&outcome.tested_url).await {
            Ok(()) => metrics::record_sink_write(true),
            Err(e) => {
                metrics::record_sink_write(false);
                summary.sink_errors += 1;
                tracing::error!(error = %e, "Failed to record hit");
                emit(out, &format!("Error writing output file: {e}"));
            }
        }
    }

    tracing::info!(
        total = summary.total,
        hits = summary.hits,
        failures = summary.failures,
        hits_file = %sink.path().display(),
        "Scan finished"
    );
    emit(out, &summary.to_string());
    Ok(summary)
}

fn emit<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{line}") {
        tracing::warn!(error = %e, "Failed to write console line");
    }
}
