//! Destination abstraction for record batches.

use crate::record::Record;
use std::path::Path;
use std::time::Duration;

/// A destination that serializes a record batch to a file.
///
/// The destination is opened once, all records are written, and the file
/// is flushed and closed on every exit path. An existing file at the
/// destination is overwritten; there are no append semantics.
pub trait RecordSink {
    /// Sink-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Write all records to `destination`, overwriting any existing file.
    fn write(&self, records: &[Record], destination: &Path) -> Result<WriteMetrics, Self::Error>;
}

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl WriteMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_per_second() {
        let metrics = WriteMetrics {
            records_written: 1000,
            total_duration: Duration::from_secs(10),
            file_size_bytes: 100000,
        };

        assert_eq!(metrics.records_per_second(), 100.0);
    }

    #[test]
    fn test_zero_duration_does_not_divide_by_zero() {
        let metrics = WriteMetrics::default();
        assert_eq!(metrics.records_per_second(), 0.0);
    }
}
