//! Configuration for generation runs.

use chrono::{DateTime, Utc};

/// Records generated when no count is given.
pub const DEFAULT_TOTAL_RECORDS: u64 = 100_000;

/// A progress event is emitted every this many records.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Number of records to synthesize.
    pub total_records: u64,
    /// Records between progress events.
    pub progress_interval: u64,
    /// Number of synthesis shards (threads).
    pub workers: usize,
    /// Random seed; a fresh one is drawn per run when absent.
    pub seed: Option<u64>,
    /// Reference instant date windows close at; defaults to the run start.
    pub now: Option<DateTime<Utc>>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total_records: DEFAULT_TOTAL_RECORDS,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            workers: 1,
            seed: None,
            now: None,
        }
    }
}

impl RunConfig {
    /// Create a run configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of records to generate.
    pub fn with_total_records(mut self, count: u64) -> Self {
        self.total_records = count;
        self
    }

    /// Set the number of records between progress events.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Set the number of synthesis shards.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fix the reference instant.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Check the settings that have no sensible fallback.
    pub fn validate(&self) -> Result<(), String> {
        if self.progress_interval == 0 {
            return Err("progress interval must be at least 1".to_string());
        }
        if self.workers == 0 {
            return Err("worker count must be at least 1".to_string());
        }
        Ok(())
    }

    /// The configured seed, or a freshly drawn one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
