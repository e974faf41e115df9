//! Command-line interface for seedgen
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate 200 employee records as a JSON array
//! seedgen --schema schemas/employees.yaml \
//!   --count 200 \
//!   --format json \
//!   --output dummy_employees.json
//!
//! # Generate 10000 records as a CSV spreadsheet, with a fixed seed
//! seedgen --schema schemas/employees.yaml \
//!   --count 10000 \
//!   --seed 42 \
//!   --format csv \
//!   --output dummy_employee_data.csv
//! ```
//!
//! Logging verbosity is controlled through `RUST_LOG`, e.g.
//! `RUST_LOG=info seedgen ...`.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use seedgen_core::{RecordSchema, RecordSink, WriteMetrics};
use seedgen_faker::Wordbook;
use seedgen_generator::RecordGenerator;
use seedgen_sink_csv::CsvSink;
use seedgen_sink_json::JsonSink;
use std::path::PathBuf;

/// Default seed when neither the CLI nor the schema provides one.
const DEFAULT_SEED: u64 = 42;

#[derive(Parser)]
#[command(name = "seedgen")]
#[command(about = "Generate synthetic employee records for database seeding and upload testing")]
struct Cli {
    /// Path to the record schema YAML file
    #[arg(long, short = 's')]
    schema: PathBuf,

    /// Number of records to generate
    #[arg(long, short = 'n', default_value = "1000")]
    count: u64,

    /// Random seed for deterministic generation (same seed = same data);
    /// overrides the seed in the schema file
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file path (overwritten if it exists)
    #[arg(long, short = 'o')]
    output: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// JSON array of objects
    Json,
    /// CSV table with a header row
    Csv,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let schema = RecordSchema::from_yaml_file(&cli.schema)
        .with_context(|| format!("Failed to load schema from {}", cli.schema.display()))?;

    let seed = cli.seed.or(schema.seed).unwrap_or(DEFAULT_SEED);

    let columns: Vec<String> = schema.field_names().iter().map(|s| s.to_string()).collect();

    let mut generator = RecordGenerator::new(schema, seed, Box::new(Wordbook::new()))
        .context("Invalid record schema")?;
    let records = generator.generate(cli.count);

    let metrics: WriteMetrics = match cli.format {
        OutputFormat::Json => JsonSink::new()
            .write(&records, &cli.output)
            .with_context(|| format!("Failed to write {}", cli.output.display()))?,
        OutputFormat::Csv => CsvSink::new()
            .with_columns(columns)
            .write(&records, &cli.output)
            .with_context(|| format!("Failed to write {}", cli.output.display()))?,
    };

    tracing::info!(
        "Generated {} records (seed {}) into '{}' ({} bytes)",
        metrics.records_written,
        seed,
        cli.output.display(),
        metrics.file_size_bytes
    );

    Ok(())
}
