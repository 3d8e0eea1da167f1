//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and required
//! fields. Every problem is reported, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ProbeConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a base URL is required (use -u or target.base_url)")]
    MissingBaseUrl,

    #[error("candidates file path must not be empty")]
    EmptyCandidatesFile,

    #[error("hits file path must not be empty")]
    EmptyHitsFile,

    #[error("retries.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("retries.max_delay_ms ({max}) is below retries.base_delay_ms ({base})")]
    DelayBounds { base: u64, max: u64 },

    #[error("http.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    MetricsAddress(String),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config
        .target
        .base_url
        .as_deref()
        .map_or(true, |url| url.trim().is_empty())
    {
        errors.push(ValidationError::MissingBaseUrl);
    }
    if config.target.candidates_file.trim().is_empty() {
        errors.push(ValidationError::EmptyCandidatesFile);
    }
    if config.output.hits_file.trim().is_empty() {
        errors.push(ValidationError::EmptyHitsFile);
    }

    let retries = &config.retries;
    if retries.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }
    if retries.max_delay_ms < retries.base_delay_ms {
        errors.push(ValidationError::DelayBounds {
            base: retries.base_delay_ms,
            max: retries.max_delay_ms,
        });
    }

    if config.http.connect_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("connect_timeout_secs"));
    }
    if config.http.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("request_timeout_secs"));
    }

    if let Some(addr) = &config.observability.metrics_address {
        if addr.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::MetricsAddress(addr.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
