//! JSONL writer for employee populations.

use crate::error::ExportError;
use crate::format::ExportMetrics;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use synth_core::Employee;
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Write `records` as one camelCase JSON object per line.
pub fn write_jsonl<P: AsRef<Path>>(
    records: &[Employee],
    output_path: P,
) -> Result<ExportMetrics, ExportError> {
    let start_time = Instant::now();
    let mut metrics = ExportMetrics::default();

    let output_path = output_path.as_ref();
    info!(
        "Writing {} employee records to JSONL file '{}'",
        records.len(),
        output_path.display()
    );

    let file = File::create(output_path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    for employee in records {
        serde_json::to_writer(&mut writer, employee)?;
        writer.write_all(b"\n")?;
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
        "JSONL export complete: {} rows, {} bytes in {:?}",
        metrics.rows_written, metrics.file_size_bytes, metrics.total_duration
    );

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_employees;
    use tempfile::TempDir;

    #[test]
    fn test_write_jsonl() {
        let records = sample_employees(5);
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("employee_data.jsonl");

        let metrics = write_jsonl(&records, &output_path).unwrap();
        assert_eq!(metrics.rows_written, 5);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: Vec<Employee> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_jsonl_field_names() {
        let records = sample_employees(1);
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("employee_data.jsonl");

        write_jsonl(&records, &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Employee::COLUMNS.len());
        for column in Employee::COLUMNS {
            assert!(object.contains_key(column), "missing {column}");
        }
    }
}
