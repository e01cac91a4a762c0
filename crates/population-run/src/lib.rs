//! Population generation runs for employee-synth.
//!
//! This crate wraps the [`PopulationGenerator`](population_generator::PopulationGenerator)
//! in a single isolated unit of work:
//! 1. Validate the schema and configuration
//! 2. Synthesize the records, optionally sharded across worker threads,
//!    streaming progress events every `progress_interval` records
//! 3. Assign managers once every shard has finished
//! 4. Deliver exactly one terminal event (completed or failed)
//!
//! The caller can cancel at any point; after cancellation no further events
//! are delivered.
//!
//! # Example
//!
//! ```ignore
//! use population_run::{spawn_generation, GenerationEvent, RunConfig};
//!
//! let config = RunConfig::new().with_total_records(10_000).with_seed(42);
//! let mut handle = spawn_generation(schema, config);
//!
//! while let Some(event) = handle.next_event().await {
//!     match event {
//!         GenerationEvent::Progress { percentage, message } => println!("{percentage:.0}% {message}"),
//!         GenerationEvent::Completed(output) => println!("{} records", output.records.len()),
//!         GenerationEvent::Failed { error_message } => eprintln!("{error_message}"),
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod metrics;
pub mod progress;
pub mod run;

pub use config::{RunConfig, DEFAULT_PROGRESS_INTERVAL, DEFAULT_TOTAL_RECORDS};
pub use error::RunError;
pub use event::{GenerationEvent, GenerationOutput, COMPLETED_MESSAGE};
pub use metrics::RunMetrics;
pub use progress::ProgressReporter;
pub use run::{shard_ranges, spawn_generation, GenerationHandle};
