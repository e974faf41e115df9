//! Tabular (CSV) sink.

use crate::error::CsvSinkError;
use csv::Writer;
use seedgen_core::{Record, RecordSink, WriteMetrics};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Sink that writes a record batch as a CSV table.
///
/// Column order comes from [`with_columns`](CsvSink::with_columns) when
/// set, otherwise from the first record's field order; every record in
/// the batch must carry the same field names in the same order or the
/// write fails with [`CsvSinkError::SchemaMismatch`]. An existing file at
/// the destination is overwritten.
///
/// Without explicit columns, an empty batch produces an empty file: there
/// is no record to derive a header from. Callers that want a header row
/// even for zero records should pass the schema's field names through
/// `with_columns`.
#[derive(Debug, Clone)]
pub struct CsvSink {
    include_header: bool,
    columns: Option<Vec<String>>,
}

impl CsvSink {
    /// Create a new CSV sink that writes a header row.
    pub fn new() -> Self {
        Self {
            include_header: true,
            columns: None,
        }
    }

    /// Set whether to include a header row in the output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Set explicit column names instead of deriving them from the first
    /// record. Records are checked against these columns, and the header
    /// row is written even when the batch is empty.
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }
}

impl Default for CsvSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSink for CsvSink {
    type Error = CsvSinkError;

    fn write(&self, records: &[Record], destination: &Path) -> Result<WriteMetrics, CsvSinkError> {
        let start_time = Instant::now();

        info!(
            "Writing CSV file '{}' with {} records",
            destination.display(),
            records.len()
        );

        let file = File::create(destination)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        let mut records_written = 0u64;

        let columns: Option<Vec<String>> = self.columns.clone().or_else(|| {
            records
                .first()
                .map(|r| r.field_names().map(|s| s.to_string()).collect())
        });

        if let Some(columns) = columns {
            if self.include_header {
                writer.write_record(&columns)?;
            }

            for (index, record) in records.iter().enumerate() {
                check_shape(index, record, &columns)?;

                let row: Vec<String> = record.iter().map(|(_, value)| value.to_text()).collect();
                writer.write_record(&row)?;

                records_written += 1;
                if records_written % 10000 == 0 {
                    debug!("Written {} records", records_written);
                }
            }
        }

        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| CsvSinkError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        let metrics = WriteMetrics {
            records_written,
            total_duration: start_time.elapsed(),
            file_size_bytes: std::fs::metadata(destination)?.len(),
        };

        info!(
            "CSV write complete: {} records, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}

/// Verify a record's field names line up with the header columns.
fn check_shape(index: usize, record: &Record, columns: &[String]) -> Result<(), CsvSinkError> {
    if record.len() == columns.len()
        && record
            .field_names()
            .zip(columns.iter())
            .all(|(name, column)| name == column)
    {
        return Ok(());
    }

    Err(CsvSinkError::SchemaMismatch {
        index,
        expected: columns.to_vec(),
        found: record.field_names().map(|s| s.to_string()).collect(),
    })
}
