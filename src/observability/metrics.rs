//! Metrics collection and exposition.
//!
//! # Metrics
//! - `probe_attempts_total` (counter): HTTP GETs issued, including retries
//! - `probe_outcomes_total` (counter): outcomes by `tag` (`hit` or error tag)
//! - `probe_duration_seconds` (histogram): time from first attempt to outcome
//! - `probe_sink_writes_total` (counter): sink appends by `result`
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Expose a Prometheus scrape endpoint on `addr`.
///
/// Must be called from within the tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_attempt() {
    metrics::counter!("probe_attempts_total").increment(1);
}

pub fn record_outcome(tag: &'static str, started: Instant) {
    metrics::counter!("probe_outcomes_total", "tag" => tag).increment(1);
    metrics::histogram!("probe_duration_seconds").record(started.elapsed().as_secs_f64());
}

pub fn record_sink_write(ok: bool) {
    let result = if ok { "ok" } else { "error" };
    metrics::counter!("probe_sink_writes_total", "result" => result).increment(1);
}
