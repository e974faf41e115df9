//! JSON array sink.

use crate::error::JsonSinkError;
use seedgen_core::{Record, RecordSink, WriteMetrics};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Default buffer size for JSON writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Sink that writes a record batch as a single JSON array of objects.
///
/// Object keys follow the record's field order, output is pretty-printed
/// UTF-8, and an existing file at the destination is overwritten.
#[derive(Debug, Clone)]
pub struct JsonSink {
    pretty: bool,
}

impl JsonSink {
    /// Create a new JSON sink with pretty-printed output.
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Set whether output is pretty-printed or compact.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSink for JsonSink {
    type Error = JsonSinkError;

    fn write(&self, records: &[Record], destination: &Path) -> Result<WriteMetrics, JsonSinkError> {
        let start_time = Instant::now();

        info!(
            "Writing JSON file '{}' with {} records",
            destination.display(),
            records.len()
        );

        let array: Vec<Value> = records
            .iter()
            .map(record_to_json)
            .collect::<Result<_, _>>()?;

        let file = File::create(destination)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &array)?;
        } else {
            serde_json::to_writer(&mut writer, &array)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        let metrics = WriteMetrics {
            records_written: records.len() as u64,
            total_duration: start_time.elapsed(),
            file_size_bytes: std::fs::metadata(destination)?.len(),
        };

        info!(
            "JSON write complete: {} records, {} bytes in {:?}",
            metrics.records_written, metrics.file_size_bytes, metrics.total_duration
        );

        Ok(metrics)
    }
}

/// Convert a record to a JSON object, preserving field order.
fn record_to_json(record: &Record) -> Result<Value, serde_json::Error> {
    let mut object = Map::with_capacity(record.len());
    for (name, value) in record.iter() {
        object.insert(name.to_string(), serde_json::to_value(value)?);
    }
    Ok(Value::Object(object))
}
