//! Source log detection
//!
//! Each legacy logging tool leaves a recognizable first data or header line.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

const READMEMS_PREFIX: &str = "80: 1C";
const ROSCO_PREFIX: &str = "#time,engine-rpm,coolant_temp,ambient_temp,";
const CANONICAL_PREFIX: &str = "#time,80x01-02_engine-rpm,80x03_coolant_temp,";
const CANONICAL_RAW_SUFFIX: &str = "0x7d_raw,0x80_raw";
const MEMSDIAG_PREFIX: &str = "Time,RPM,IdleError,IdlePos(Steps),";

/// Tool that produced a telemetry log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// `readmems` console dump of raw responses
    ReadMems,
    /// `mems-rosco` CSV with its own column names
    MemsRosco,
    /// `mems-rosco` CSV with canonical column names and no raw frames
    MemsRoscoV2,
    /// Canonical CSV including raw frames
    MemsFcr,
    /// `memsdiag` CSV
    MemsDiag,
    /// Nothing recognizable
    Unknown,
}

impl SourceFormat {
    /// Detect the format from log text
    ///
    /// Lines are scanned in order and the first recognizable one wins.
    pub fn detect(text: &str) -> Self {
        text.lines()
            .map(|line| line.trim_end_matches('\r'))
            .find_map(Self::detect_line)
            .unwrap_or(SourceFormat::Unknown)
    }

    /// Detect the format of a log file
    pub fn detect_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::detect(&String::from_utf8_lossy(&bytes)))
    }

    fn detect_line(line: &str) -> Option<Self> {
        if line.starts_with(READMEMS_PREFIX) {
            Some(SourceFormat::ReadMems)
        } else if line.starts_with(ROSCO_PREFIX) {
            Some(SourceFormat::MemsRosco)
        } else if line.starts_with(CANONICAL_PREFIX) {
            if line.trim_end().ends_with(CANONICAL_RAW_SUFFIX) {
                Some(SourceFormat::MemsFcr)
            } else {
                Some(SourceFormat::MemsRoscoV2)
            }
        } else if line.starts_with(MEMSDIAG_PREFIX) {
            Some(SourceFormat::MemsDiag)
        } else {
            None
        }
    }

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::ReadMems => "readmems",
            SourceFormat::MemsRosco => "memsrosco",
            SourceFormat::MemsRoscoV2 => "memsroscov2",
            SourceFormat::MemsFcr => "memsfcr",
            SourceFormat::MemsDiag => "memsdiag",
            SourceFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
