//! Human-readable console lines for probe outcomes.

use std::fmt;

use crate::probe::ProbeOutcome;

/// Console line for one outcome.
pub fn outcome_line(outcome: &ProbeOutcome) -> String {
    match &outcome.error {
        None => format!("Directory found: {}", outcome.tested_url),
        Some(error) => format!(
            "Error checking {}: [{}] {}",
            outcome.tested_url,
            error.tag(),
            error
        ),
    }
}

/// Totals for a finished scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub total: usize,
    pub hits: usize,
    pub failures: usize,
    pub sink_errors: usize,
}

impl ScanSummary {
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.total += 1;
        if outcome.is_hit() {
            self.hits += 1;
        } else {
            self.failures += 1;
        }
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checked {} paths: {} found, {} failed",
            self.total, self.hits, self.failures
        )?;
        if self.sink_errors > 0 {
            write!(f, " ({} could not be saved)", self.sink_errors)?;
        }
        Ok(())
    }
}
