//! employee-synth library
//!
//! Command-line plumbing for generating synthetic employee populations. The
//! heavy lifting lives in the workspace crates:
//!
//! - `synth_core` - schema, validation and the `Employee` record
//! - `population_generator` - record synthesis and manager assignment
//! - `population_run` - isolated runs with progress events and cancellation
//! - `population_export` - CSV and JSONL writers
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate 100,000 employees as CSV into the current directory
//! employee-synth generate --schema examplecorp_schema.yaml
//!
//! # Reproducible JSONL output on four threads
//! employee-synth generate --schema examplecorp_schema.yaml \
//!   --record-count 20000 --workers 4 --seed 42 --format jsonl --output-dir out
//!
//! # Check a schema without generating anything
//! employee-synth validate --schema examplecorp_schema.yaml
//! ```

use clap::Args;
use population_export::ExportFormat;
use population_run::{RunConfig, DEFAULT_PROGRESS_INTERVAL, DEFAULT_TOTAL_RECORDS};
use std::path::PathBuf;

pub mod generate;
pub mod validate;

/// Where to read the organizational schema from.
#[derive(Args, Clone, Debug)]
pub struct SchemaArgs {
    /// Path to schema file (YAML, or JSON when the extension is .json)
    #[arg(long, short = 's', env = "EMPLOYEE_SYNTH_SCHEMA")]
    pub schema: PathBuf,
}

/// Arguments of the `generate` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Number of employee records to generate
    #[arg(long, default_value_t = DEFAULT_TOTAL_RECORDS, env = "EMPLOYEE_SYNTH_RECORD_COUNT")]
    pub record_count: u64,

    /// Log a progress line every this many records
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL, env = "EMPLOYEE_SYNTH_PROGRESS_INTERVAL")]
    pub progress_interval: u64,

    /// Number of threads records are synthesized on (output does not depend on it)
    #[arg(long, default_value_t = 1, env = "EMPLOYEE_SYNTH_WORKERS")]
    pub workers: usize,

    /// Random seed for deterministic generation (random when omitted)
    #[arg(long, env = "EMPLOYEE_SYNTH_SEED")]
    pub seed: Option<u64>,

    /// Output file format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv, env = "EMPLOYEE_SYNTH_FORMAT")]
    pub format: ExportFormat,

    /// Directory the output file is written to
    #[arg(long, default_value = ".", env = "EMPLOYEE_SYNTH_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Omit the CSV header row
    #[arg(long, env = "EMPLOYEE_SYNTH_NO_HEADER")]
    pub no_header: bool,

    /// Dry-run mode: validate schema and settings without generating
    #[arg(long, env = "EMPLOYEE_SYNTH_DRY_RUN")]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Run configuration these arguments describe.
    pub fn run_config(&self) -> RunConfig {
        let config = RunConfig::new()
            .with_total_records(self.record_count)
            .with_progress_interval(self.progress_interval)
            .with_workers(self.workers);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// `<output_dir>/employee_data.<ext>`
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.format.default_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    #[test]
    fn test_generate_args_defaults() {
        let cli = TestCli::try_parse_from(["test", "--schema", "schema.yaml"]).unwrap();
        let args = cli.args;

        assert_eq!(args.record_count, 100_000);
        assert_eq!(args.progress_interval, 1000);
        assert_eq!(args.workers, 1);
        assert_eq!(args.seed, None);
        assert_eq!(args.format, ExportFormat::Csv);
        assert!(!args.no_header);
        assert!(!args.dry_run);
        assert_eq!(args.output_path(), PathBuf::from("./employee_data.csv"));

        let config = args.run_config();
        assert_eq!(config.total_records, 100_000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_generate_args_overrides() {
        let cli = TestCli::try_parse_from([
            "test",
            "-s",
            "schema.json",
            "--record-count",
            "500",
            "--progress-interval",
            "50",
            "--workers",
            "4",
            "--seed",
            "7",
            "--format",
            "jsonl",
            "--output-dir",
            "out",
            "--no-header",
        ])
        .unwrap();
        let args = cli.args;

        assert_eq!(args.output_path(), PathBuf::from("out/employee_data.jsonl"));
        assert!(args.no_header);

        let config = args.run_config();
        assert_eq!(config.total_records, 500);
        assert_eq!(config.progress_interval, 50);
        assert_eq!(config.workers, 4);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = TestCli::try_parse_from(["test", "--schema", "s.yaml", "--format", "xlsx"]);
        assert!(result.is_err());
    }
}
