//! Generation run orchestration.
//!
//! A run executes on tokio's blocking pool so the caller's task is never
//! blocked by synthesis. Inside the run, records are split into contiguous
//! shards synthesized on scoped threads; the blocking thread itself acts as
//! coordinator, turning shard counts into progress events. Manager
//! assignment starts only after every shard has been joined.

use crate::config::RunConfig;
use crate::error::RunError;
use crate::event::{GenerationEvent, GenerationOutput, COMPLETED_MESSAGE};
use crate::metrics::RunMetrics;
use crate::progress::ProgressReporter;
use chrono::Utc;
use population_generator::PopulationGenerator;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc as std_mpsc;
use std::time::Instant;
use synth_core::{Employee, Schema};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Capacity of the event channel between the run and its caller.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shards poll the cancellation token every this many records.
const CANCEL_CHECK_STRIDE: u64 = 256;

/// Caller side of a running generation.
///
/// Dropping the handle cancels the run.
pub struct GenerationHandle {
    events: mpsc::Receiver<GenerationEvent>,
    cancel: CancellationToken,
    finished: bool,
    task: JoinHandle<()>,
}

impl GenerationHandle {
    /// Wait for the next event.
    ///
    /// Returns `None` once the terminal event has been delivered, after
    /// [`cancel`](Self::cancel), or if the run ended without one.
    pub async fn next_event(&mut self) -> Option<GenerationEvent> {
        if self.finished || self.cancel.is_cancelled() {
            return None;
        }

        let event = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            event = self.events.recv() => event,
        };

        match &event {
            Some(event) if !event.is_terminal() => {}
            _ => self.finished = true,
        }
        event
    }

    /// Stop the run. No events are delivered afterwards.
    ///
    /// Safe to call repeatedly, and after the run has completed.
    pub fn cancel(&mut self) {
        if !self.cancel.is_cancelled() && !self.finished {
            info!("Cancelling generation run");
        }
        self.cancel.cancel();
        self.events.close();
        self.finished = true;
    }

    /// A token that cancels this run when triggered from elsewhere.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Whether the run's driver task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Drain events until the terminal one and return the population.
    pub async fn wait(mut self) -> Result<GenerationOutput, RunError> {
        while let Some(event) = self.next_event().await {
            match event {
                GenerationEvent::Progress { .. } => {}
                GenerationEvent::Completed(output) => return Ok(output),
                GenerationEvent::Failed { error_message } => {
                    return Err(RunError::Failed(error_message))
                }
            }
        }
        Err(RunError::Cancelled)
    }
}

impl Drop for GenerationHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Start a generation run in the background.
///
/// Must be called from within a tokio runtime.
pub fn spawn_generation(schema: Schema, config: RunConfig) -> GenerationHandle {
    let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let cancel = CancellationToken::new();
    let task = tokio::spawn(drive_run(schema, config, events_tx, cancel.clone()));

    GenerationHandle {
        events: events_rx,
        cancel,
        finished: false,
        task,
    }
}

/// Run the blocking generation and deliver its terminal event.
async fn drive_run(
    schema: Schema,
    config: RunConfig,
    events: mpsc::Sender<GenerationEvent>,
    cancel: CancellationToken,
) {
    let progress_events = events.clone();
    let worker_cancel = cancel.clone();
    let runtime = Handle::current();
    let result = tokio::task::spawn_blocking(move || {
        run_blocking(schema, config, &runtime, &progress_events, &worker_cancel)
    })
    .await;

    let terminal = match result {
        Ok(Ok(output)) => GenerationEvent::Completed(output),
        Ok(Err(RunError::Cancelled)) => {
            debug!("Generation run stopped after cancellation");
            return;
        }
        Ok(Err(e)) => {
            error!("Generation run failed: {}", e);
            GenerationEvent::Failed {
                error_message: e.to_string(),
            }
        }
        Err(e) => {
            let e = RunError::WorkerPanicked(e.to_string());
            error!("Generation run failed: {}", e);
            GenerationEvent::Failed {
                error_message: e.to_string(),
            }
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => debug!("Dropping terminal event of a cancelled run"),
        sent = events.send(terminal) => {
            if sent.is_err() {
                debug!("Caller went away before the terminal event");
            }
        }
    }
}

/// Deliver one event from a blocking thread, giving up when the run is
/// cancelled while the channel is full. Returns whether it was delivered.
fn send_event(
    runtime: &Handle,
    events: &mpsc::Sender<GenerationEvent>,
    cancel: &CancellationToken,
    event: GenerationEvent,
) -> bool {
    runtime.block_on(async {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => false,
            sent = events.send(event) => sent.is_ok(),
        }
    })
}

/// Both generation phases, on the current (blocking) thread.
fn run_blocking(
    schema: Schema,
    config: RunConfig,
    runtime: &Handle,
    events: &mpsc::Sender<GenerationEvent>,
    cancel: &CancellationToken,
) -> Result<GenerationOutput, RunError> {
    let start_time = Instant::now();

    config.validate().map_err(RunError::Config)?;
    schema.validate()?;

    let seed = config.resolve_seed();
    let now = config.now.unwrap_or_else(Utc::now);
    let generator = PopulationGenerator::new(schema, seed, now)?;

    let total = config.total_records;
    let shards = shard_ranges(total, config.workers);
    info!(
        "Generating {} records across {} shard(s) (seed={})",
        total,
        shards.len(),
        seed
    );

    // Phase 1: synthesis
    let synthesis_start = Instant::now();
    let shard_outputs = synthesize_shards(
        &generator,
        &shards,
        ProgressReporter::new(total, config.progress_interval),
        config.progress_interval,
        runtime,
        events,
        cancel,
    );

    let mut records = Vec::with_capacity(total as usize);
    for output in shard_outputs {
        records.extend(output?);
    }
    let synthesis_duration = synthesis_start.elapsed();

    if cancel.is_cancelled() {
        return Err(RunError::Cancelled);
    }

    // Phase 2: manager assignment, over the complete population
    let assignment_start = Instant::now();
    generator.assign_managers(&mut records);
    let assignment_duration = assignment_start.elapsed();

    let metrics = RunMetrics {
        records: records.len() as u64,
        seed,
        workers: shards.len(),
        synthesis_duration,
        assignment_duration,
        total_duration: start_time.elapsed(),
    };

    info!(
        "Generation complete: {} records in {:?} ({:.2} records/sec)",
        metrics.records,
        metrics.total_duration,
        metrics.records_per_second()
    );

    Ok(GenerationOutput {
        records,
        message: COMPLETED_MESSAGE.to_string(),
        metrics,
    })
}

/// Synthesize every shard on its own scoped thread while this thread
/// forwards progress. Returns shard outputs in shard order.
fn synthesize_shards(
    generator: &PopulationGenerator,
    shards: &[RangeInclusive<u64>],
    mut reporter: ProgressReporter,
    interval: u64,
    runtime: &Handle,
    events: &mpsc::Sender<GenerationEvent>,
    cancel: &CancellationToken,
) -> Vec<Result<Vec<Employee>, RunError>> {
    let synthesized = AtomicU64::new(0);
    let (counts_tx, counts_rx) = std_mpsc::channel::<u64>();

    std::thread::scope(|scope| {
        let workers: Vec<_> = shards
            .iter()
            .cloned()
            .map(|range| {
                let counts_tx = counts_tx.clone();
                let synthesized = &synthesized;
                scope.spawn(move || {
                    synthesize_shard(generator, range, synthesized, interval, &counts_tx, cancel)
                })
            })
            .collect();
        // Only the workers' senders remain, so the loop ends when they do.
        drop(counts_tx);

        for done in counts_rx {
            if cancel.is_cancelled() {
                continue;
            }
            for event in reporter.advance_to(done) {
                if !send_event(runtime, events, cancel, event) {
                    debug!("Run cancelled or receiver closed, stopping progress delivery");
                    cancel.cancel();
                    break;
                }
            }
        }

        workers
            .into_iter()
            .map(|worker| {
                worker
                    .join()
                    .map_err(|panic| RunError::WorkerPanicked(panic_message(&*panic)))
                    .and_then(|output| output)
            })
            .collect()
    })
}

/// Synthesize one contiguous index range.
fn synthesize_shard(
    generator: &PopulationGenerator,
    range: RangeInclusive<u64>,
    synthesized: &AtomicU64,
    interval: u64,
    counts: &std_mpsc::Sender<u64>,
    cancel: &CancellationToken,
) -> Result<Vec<Employee>, RunError> {
    let mut records = Vec::with_capacity(range.size_hint().0);

    for (position, employee) in generator.records(range).enumerate() {
        if position as u64 % CANCEL_CHECK_STRIDE == 0 && cancel.is_cancelled() {
            return Err(RunError::Cancelled);
        }
        records.push(employee);

        let done = synthesized.fetch_add(1, Ordering::Relaxed) + 1;
        if done % interval == 0 && counts.send(done).is_err() {
            return Err(RunError::Cancelled);
        }
    }

    Ok(records)
}

/// Split `1..=total` into at most `workers` contiguous, near-equal ranges.
pub fn shard_ranges(total: u64, workers: usize) -> Vec<RangeInclusive<u64>> {
    if total == 0 {
        return Vec::new();
    }

    let shard_count = (workers.max(1) as u64).min(total);
    let base = total / shard_count;
    let extra = total % shard_count;

    let mut ranges = Vec::with_capacity(shard_count as usize);
    let mut start = 1;
    for shard in 0..shard_count {
        let len = base + u64::from(shard < extra);
        ranges.push(start..=start + len - 1);
        start += len;
    }
    ranges
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
