//! Metrics collected during a generation run.

use std::time::Duration;

/// Timings and counts for one completed run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunMetrics {
    /// Number of records in the population.
    pub records: u64,
    /// Seed the run used.
    pub seed: u64,
    /// Number of synthesis shards.
    pub workers: usize,
    /// Time spent synthesizing records (phase 1).
    pub synthesis_duration: Duration,
    /// Time spent assigning managers (phase 2).
    pub assignment_duration: Duration,
    /// Total run duration, including validation.
    pub total_duration: Duration,
}

impl RunMetrics {
    /// Calculate records per second over the whole run.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
