//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a probe run.
//! All types derive Serde traits for deserialization from config files.

use serde::Deserialize;

/// Root configuration for a probe run.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProbeConfig {
    /// What to probe (base URL, candidate list).
    pub target: TargetConfig,

    /// Where confirmed hits are recorded.
    pub output: OutputConfig,

    /// HTTP client settings.
    pub http: HttpConfig,

    /// Retry configuration.
    pub retries: RetryConfig,

    /// Fan-out limits.
    pub concurrency: ConcurrencyConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Probe target.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Base URL candidates are appended to (e.g., "http://example.com").
    pub base_url: Option<String>,

    /// Line-delimited file of candidate paths.
    pub candidates_file: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            candidates_file: "admin.txt".to_string(),
        }
    }
}

/// Hit sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Append-only file receiving one confirmed URL per line.
    pub hits_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            hits_file: "found_directories.txt".to_string(),
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every probe.
    pub user_agent: String,

    /// Connection establishment timeout in seconds (client default if unset).
    pub connect_timeout_secs: Option<u64>,

    /// Per-request deadline in seconds (client default if unset).
    pub request_timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("pathprobe/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: Some(30),
        }
    }
}

/// Delay growth between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackoffStrategy {
    /// Same delay before every retry.
    #[default]
    Fixed,
    /// Delay doubles per attempt, capped at `max_delay_ms`.
    Exponential,
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts per candidate, including the first.
    pub max_attempts: u32,

    /// Delay before the first retry in milliseconds.
    pub base_delay_ms: u64,

    /// Upper bound for any single delay in milliseconds.
    pub max_delay_ms: u64,

    pub strategy: BackoffStrategy,

    /// Add up to 10% random jitter to each delay.
    pub jitter: bool,

    /// Retry 5xx responses like transport errors.
    pub retry_on_server_error: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            max_delay_ms: 1000,
            strategy: BackoffStrategy::Fixed,
            jitter: false,
            retry_on_server_error: false,
        }
    }
}

/// Fan-out configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ConcurrencyConfig {
    /// Maximum probes in flight at once (0 = unbounded).
    pub max_in_flight: usize,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Prometheus scrape endpoint bind address; metrics are not exported if unset.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_address: None,
        }
    }
}
