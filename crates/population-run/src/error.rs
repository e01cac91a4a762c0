//! Error types for generation runs.

use thiserror::Error;

/// Errors that can end a generation run.
#[derive(Error, Debug)]
pub enum RunError {
    /// Invalid run configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schema failed validation before any record was synthesized.
    #[error("Schema error: {0}")]
    Schema(#[from] synth_core::SchemaError),

    /// Generator could not be constructed.
    #[error("Generator error: {0}")]
    Generator(#[from] population_generator::GeneratorError),

    /// A synthesis worker panicked.
    #[error("Generation worker failed: {0}")]
    WorkerPanicked(String),

    /// The run reported a failure through its terminal event.
    #[error("Generation failed: {0}")]
    Failed(String),

    /// The run was cancelled before it completed.
    #[error("Generation was cancelled")]
    Cancelled,
}
