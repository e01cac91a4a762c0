//! CSV writer for employee populations.

use crate::error::ExportError;
use crate::format::ExportMetrics;
use csv::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use synth_core::Employee;
use tracing::{debug, info};

/// Default buffer size for CSV writing.
const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Write `records` as CSV, optionally preceded by the column header row.
pub fn write_csv<P: AsRef<Path>>(
    records: &[Employee],
    output_path: P,
    include_header: bool,
) -> Result<ExportMetrics, ExportError> {
    let start_time = Instant::now();
    let mut metrics = ExportMetrics::default();

    let output_path = output_path.as_ref();
    info!(
        "Writing {} employee records to CSV file '{}'",
        records.len(),
        output_path.display()
    );

    let file = File::create(output_path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    if include_header {
        writer.write_record(Employee::COLUMNS)?;
    }

    for employee in records {
        writer.write_record(employee.to_record())?;
        metrics.rows_written += 1;

        if metrics.rows_written % 10000 == 0 {
            debug!("Written {} rows", metrics.rows_written);
        }
    }

    writer.flush()?;
    drop(writer);

    metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
    metrics.total_duration = start_time.elapsed();

    info!(
        "CSV export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}
