//! Events a generation run delivers to its caller.

use crate::metrics::RunMetrics;
use synth_core::Employee;

/// Message carried by the completion event.
pub const COMPLETED_MESSAGE: &str = "Data generation complete.";

/// The finished population handed to the caller.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// Every record, ordered by index, managers assigned.
    pub records: Vec<Employee>,
    /// Human-readable completion message.
    pub message: String,
    /// Timings and counts of the run.
    pub metrics: RunMetrics,
}

/// Notification from a running generation.
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    /// Another `progress_interval` records were synthesized.
    Progress { percentage: f64, message: String },
    /// Both phases finished. Terminal.
    Completed(GenerationOutput),
    /// The run failed; no records are delivered. Terminal.
    Failed { error_message: String },
}

impl GenerationEvent {
    /// Whether no further events follow this one.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GenerationEvent::Progress { .. })
    }
}
