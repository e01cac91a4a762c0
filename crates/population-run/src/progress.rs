//! Turns synthesized-record counts into progress events.

use crate::event::GenerationEvent;

/// Emits one progress event per completed `interval` of records.
///
/// Counts may arrive out of order and skip values when several shards
/// report; every interval boundary up to the highest count seen is emitted
/// exactly once, in increasing order.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    total: u64,
    interval: u64,
    emitted: u64,
}

impl ProgressReporter {
    pub fn new(total: u64, interval: u64) -> Self {
        Self {
            total,
            interval: interval.max(1),
            emitted: 0,
        }
    }

    /// Events for every interval boundary reached by `done` and not yet
    /// reported.
    pub fn advance_to(&mut self, done: u64) -> Vec<GenerationEvent> {
        let reached = done.min(self.total) / self.interval;
        let events = (self.emitted + 1..=reached)
            .map(|step| self.event_for(step * self.interval))
            .collect();
        self.emitted = self.emitted.max(reached);
        events
    }

    /// Number of events emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn event_for(&self, records: u64) -> GenerationEvent {
        GenerationEvent::Progress {
            percentage: records as f64 * 100.0 / self.total as f64,
            message: format!("Generated {records} records..."),
        }
    }
}
