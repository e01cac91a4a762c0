//! Command-line interface for employee-synth
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate the default 100,000 employees as employee_data.csv
//! employee-synth generate --schema examplecorp_schema.yaml
//!
//! # Validate a schema and print its summary
//! employee-synth validate --schema examplecorp_schema.yaml
//! ```
//!
//! Set `RUST_LOG=info` to see progress lines.

use clap::{Parser, Subcommand};
use employee_synth::{generate, validate, GenerateArgs, SchemaArgs};

#[derive(Parser)]
#[command(name = "employee-synth")]
#[command(about = "Generate synthetic employee populations from an organizational schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a population and write it to a CSV or JSONL file
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Load and validate a schema, then print a summary of it
    Validate {
        #[command(flatten)]
        args: SchemaArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => generate::run_generate(args).await,
        Commands::Validate { args } => validate::run_validate(&args),
    }
}
