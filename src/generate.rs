//! `generate` command runner.

use anyhow::{bail, Context};
use population_export::write_population;
use population_generator::direct_report_counts;
use population_run::{spawn_generation, GenerationEvent, GenerationOutput};
use synth_core::Schema;

use crate::GenerateArgs;

/// Generate a population and write it to `<output_dir>/employee_data.<ext>`.
///
/// Ctrl-C cancels the run; nothing is written in that case.
pub async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let schema = Schema::from_file(&args.schema.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema.schema))?;

    let config = args.run_config();
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid generation settings")?;

    let output_path = args.output_path();

    if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Would generate {} employee records on {} worker(s) (seed={})",
            args.record_count,
            args.workers,
            args.seed
                .map(|seed| seed.to_string())
                .unwrap_or_else(|| "random".to_string())
        );
        tracing::info!("[DRY-RUN] Departments: {:?}", schema.department_names());
        tracing::info!("[DRY-RUN] Output: {} ({})", output_path.display(), args.format);
        tracing::info!("[DRY-RUN] Schema validated successfully");
        return Ok(());
    }

    tracing::info!(
        "Generating {} employee records across {} departments",
        args.record_count,
        schema.departments.len()
    );

    let output = drive(spawn_generation(schema, config)).await?;

    let metrics = &output.metrics;
    tracing::info!("{}", output.message);
    tracing::info!(
        "Generated {} records (seed={}) in {:?}: synthesis {:?}, manager assignment {:?} ({:.0} records/sec)",
        metrics.records,
        metrics.seed,
        metrics.total_duration,
        metrics.synthesis_duration,
        metrics.assignment_duration,
        metrics.records_per_second()
    );

    let reports = direct_report_counts(&output.records);
    if let Some(widest) = reports.values().max() {
        tracing::info!(
            "{} employees have direct reports (widest span: {})",
            reports.len(),
            widest
        );
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", args.output_dir))?;

    let records = output.records;
    let format = args.format;
    let include_header = !args.no_header;
    let path = output_path.clone();
    let export = tokio::task::spawn_blocking(move || {
        write_population(&records, &path, format, include_header)
    })
    .await
    .context("Export task panicked")?
    .with_context(|| format!("Failed to write {}", output_path.display()))?;

    tracing::info!(
        "Wrote {} rows ({} bytes) to {}",
        export.rows_written,
        export.file_size_bytes,
        output_path.display()
    );

    Ok(())
}

/// Log progress until the run finishes, or cancel it on Ctrl-C.
async fn drive(mut handle: population_run::GenerationHandle) -> anyhow::Result<GenerationOutput> {
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let (event, interrupted) = tokio::select! {
            event = handle.next_event() => (event, false),
            _ = &mut ctrl_c => (None, true),
        };

        if interrupted {
            handle.cancel();
            bail!("Generation interrupted");
        }

        match event {
            Some(GenerationEvent::Progress {
                percentage,
                message,
            }) => tracing::info!("[{percentage:>5.1}%] {message}"),
            Some(GenerationEvent::Completed(output)) => return Ok(output),
            Some(GenerationEvent::Failed { error_message }) => {
                bail!("Generation failed: {error_message}")
            }
            None => bail!("Generation ended without a result"),
        }
    }
}
