//! Probe outcome and error taxonomy.

use thiserror::Error;

/// Why a candidate is not a confirmed hit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// Transport error that retrying cannot fix (e.g. malformed URL).
    #[error("transport failure: {0}")]
    TransportFailure(String),

    /// The server answered with something other than 200.
    #[error("unexpected status code {0}")]
    StatusFailure(u16),

    /// Every attempt failed below the HTTP level.
    #[error("all {attempts} attempts failed, last error: {last_error}")]
    ExhaustedRetries { attempts: u32, last_error: String },

    /// The run was cancelled before a response arrived.
    #[error("probe cancelled")]
    Cancelled,
}

impl ProbeError {
    /// Stable taxonomy tag for console output and metric labels.
    pub fn tag(&self) -> &'static str {
        match self {
            ProbeError::TransportFailure(_) => "TransportFailure",
            ProbeError::StatusFailure(_) => "StatusFailure",
            ProbeError::ExhaustedRetries { .. } => "ExhaustedRetries",
            ProbeError::Cancelled => "Cancelled",
        }
    }
}

/// Result of probing one candidate. Exactly one is produced per candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub tested_url: String,
    pub error: Option<ProbeError>,
}

impl ProbeOutcome {
    pub fn hit(tested_url: String) -> Self {
        Self {
            tested_url,
            error: None,
        }
    }

    pub fn failed(tested_url: String, error: ProbeError) -> Self {
        Self {
            tested_url,
            error: Some(error),
        }
    }

    /// A confirmed hit: the probe got HTTP 200.
    pub fn is_hit(&self) -> bool {
        self.error.is_none()
    }

    /// Label for `probe_outcomes_total`.
    pub fn tag(&self) -> &'static str {
        self.error.as_ref().map_or("hit", ProbeError::tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(ProbeOutcome::hit("u".into()).tag(), "hit");
        assert_eq!(
            ProbeOutcome::failed("u".into(), ProbeError::StatusFailure(403)).tag(),
            "StatusFailure"
        );
        let exhausted = ProbeError::ExhaustedRetries {
            attempts: 3,
            last_error: "connection refused".into(),
        };
        assert_eq!(exhausted.tag(), "ExhaustedRetries");
        assert_eq!(
            exhausted.to_string(),
            "all 3 attempts failed, last error: connection refused"
        );
    }
}
