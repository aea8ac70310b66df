//! Log Ingestion
//!
//! Turns legacy logging-tool output into a [`Scenario`]. Every adapter reduces
//! its source to `0x80`/`0x7d` hex pairs and the shared [`FrameCodec`] does all
//! of the decoding, so field scaling lives in one place.

mod canonical;
mod error;
mod format;
mod pairing;
mod readmems;
mod rosco;
mod table;

pub use error::{IngestError, RecordError};
pub use format::SourceFormat;
pub use pairing::{FramePair, FramePairer};
pub use readmems::TIME_FORMAT;
pub use table::{Column, CsvTable, Row};

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::codec::FrameCodec;
use crate::config::ConvertConfig;
use crate::scenario::Scenario;

/// A record that could not be converted
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Source line (1-based)
    pub line: usize,
    /// Why it was skipped
    pub error: RecordError,
}

/// Outcome counts for one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    /// Detected source format
    pub format: SourceFormat,
    /// Records added to the scenario
    pub records: usize,
    /// Records dropped, in source order
    pub skipped: Vec<SkippedRecord>,
    /// Frame halves that never formed a pair
    pub discarded_halves: usize,
}

impl ConversionReport {
    fn new(format: SourceFormat) -> Self {
        Self {
            format,
            records: 0,
            skipped: Vec::new(),
            discarded_halves: 0,
        }
    }

    /// One-line summary for logs
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            format: self.format,
            records: self.records,
            skipped: self.skipped.len(),
            discarded_halves: self.discarded_halves,
        }
    }
}

/// Serializable counts of a [`ConversionReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Detected source format
    pub format: SourceFormat,
    /// Records converted
    pub records: usize,
    /// Records skipped
    pub skipped: usize,
    /// Unpaired frame halves
    pub discarded_halves: usize,
}

/// A frozen scenario together with its report
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Converted records
    pub scenario: Scenario,
    /// Per-record outcomes
    pub report: ConversionReport,
}

/// Frame pairs gathered by an adapter before decoding
#[derive(Debug, Default)]
pub(crate) struct Batch {
    pub pairs: Vec<FramePair>,
    pub skipped: Vec<SkippedRecord>,
    pub discarded_halves: usize,
}

/// Convert log text of a known format
pub fn convert(
    format: SourceFormat,
    text: &str,
    config: &ConvertConfig,
) -> Result<Conversion, IngestError> {
    let codec = FrameCodec::new(config.codec);

    let batch = match format {
        SourceFormat::ReadMems => readmems::frame_pairs(text, config.start_time()?),
        SourceFormat::MemsRosco | SourceFormat::MemsRoscoV2 => {
            rosco::frame_pairs(&CsvTable::parse(text)?, &codec)
        }
        SourceFormat::MemsFcr => canonical::frame_pairs(&CsvTable::parse(text)?, &codec),
        SourceFormat::MemsDiag => return Err(IngestError::Unsupported(format)),
        SourceFormat::Unknown => return Err(IngestError::UnknownFormat),
    };

    let mut scenario = Scenario::new();
    let mut report = ConversionReport::new(format);
    report.skipped = batch.skipped;
    report.discarded_halves = batch.discarded_halves;

    for pair in batch.pairs {
        match codec.decode(&pair.hex80, &pair.hex7d, pair.timestamp) {
            Ok(record) => {
                tracing::debug!(line = pair.line, time = %record.time, "converted record");
                scenario.append(record)?;
                report.records += 1;
            }
            Err(e) => report.skipped.push(SkippedRecord {
                line: pair.line,
                error: e.into(),
            }),
        }
    }

    report.skipped.sort_by_key(|s| s.line);
    for skipped in &report.skipped {
        tracing::warn!(line = skipped.line, "skipped record: {}", skipped.error);
    }
    if report.discarded_halves > 0 {
        tracing::warn!(
            halves = report.discarded_halves,
            "discarded unpaired frame halves"
        );
    }

    scenario.freeze();
    tracing::info!(
        format = %format,
        records = report.records,
        skipped = report.skipped.len(),
        idle_speed_offset = ?codec.options().idle_speed_offset,
        "conversion complete"
    );

    Ok(Conversion { scenario, report })
}

/// Detect and convert a log file
pub fn convert_file<P: AsRef<Path>>(
    path: P,
    config: &ConvertConfig,
) -> Result<Conversion, IngestError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let format = SourceFormat::detect(&text);
    tracing::info!(path = %path.display(), format = %format, "detected log format");
    convert(format, &text, config)
}
