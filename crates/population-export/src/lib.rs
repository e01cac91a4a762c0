//! File writers for generated employee populations.
//!
//! Every record is flattened into the fixed column set of
//! [`Employee::COLUMNS`](synth_core::Employee::COLUMNS), in field
//! declaration order, and written either as CSV (one header row plus one
//! row per employee) or as JSONL (one JSON object per line).
//!
//! # Example
//!
//! ```ignore
//! use population_export::{write_csv, ExportFormat};
//!
//! let path = output_dir.join(ExportFormat::Csv.default_file_name());
//! let metrics = write_csv(&records, &path, true)?;
//! println!("{} rows, {} bytes", metrics.rows_written, metrics.file_size_bytes);
//! ```

mod csv_file;
mod error;
mod format;
mod jsonl_file;

#[cfg(test)]
mod test_support;

pub use csv_file::write_csv;
pub use error::ExportError;
pub use format::{ExportFormat, ExportMetrics};
pub use jsonl_file::write_jsonl;

use std::path::Path;
use synth_core::Employee;

/// Write `records` to `path` in the given format.
pub fn write_population<P: AsRef<Path>>(
    records: &[Employee],
    path: P,
    format: ExportFormat,
    include_header: bool,
) -> Result<ExportMetrics, ExportError> {
    match format {
        ExportFormat::Csv => write_csv(records, path, include_header),
        ExportFormat::Jsonl => write_jsonl(records, path),
    }
}
