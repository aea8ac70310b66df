//! Scenario output formats
//!
//! Writes scenarios as canonical CSV (re-ingestible, raw frames included) or
//! as JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::record::{Field, TelemetryRecord};
use crate::scenario::Scenario;

/// Timestamp column
pub const TIME_COLUMN: &str = "#time";
/// Raw `0x7d` frame column
pub const RAW_7D_COLUMN: &str = "0x7d_raw";
/// Raw `0x80` frame column
pub const RAW_80_COLUMN: &str = "0x80_raw";

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical comma-separated values
    #[default]
    Csv,
    /// JSON array of records
    Json,
}

impl OutputFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Canonical CSV header line (without newline)
pub fn csv_header() -> String {
    let mut header = String::from(TIME_COLUMN);
    for field in Field::all() {
        header.push(',');
        header.push_str(field.column());
    }
    header.push(',');
    header.push_str(RAW_7D_COLUMN);
    header.push(',');
    header.push_str(RAW_80_COLUMN);
    header
}

/// One canonical CSV row (without newline)
pub fn csv_row(record: &TelemetryRecord) -> String {
    let mut row = record.time.clone();
    for field in Field::all() {
        row.push(',');
        row.push_str(&record.get(field).to_string());
    }
    row.push(',');
    row.push_str(&record.frame7d);
    row.push(',');
    row.push_str(&record.frame80);
    row
}

/// Write records as canonical CSV
pub fn write_csv<'a, W, I>(writer: W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TelemetryRecord>,
{
    let mut writer = BufWriter::new(writer);

    writeln!(writer, "{}", csv_header())?;
    for record in records {
        writeln!(writer, "{}", csv_row(record))?;
    }

    writer.flush()
}

/// Write records as a pretty-printed JSON array
pub fn write_json<'a, W, I>(writer: W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TelemetryRecord>,
{
    let records: Vec<&TelemetryRecord> = records.into_iter().collect();
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    writer.flush()
}

/// Save a scenario to a file in the given format
pub fn save<P: AsRef<Path>>(path: P, scenario: &Scenario, format: OutputFormat) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    match format {
        OutputFormat::Csv => write_csv(file, scenario)?,
        OutputFormat::Json => write_json(file, scenario)?,
    }
    tracing::info!(
        path = %path.as_ref().display(),
        records = scenario.len(),
        "saved scenario as {}",
        format.extension()
    );
    Ok(())
}
