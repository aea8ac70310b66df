//! Conversion settings
//!
//! Loaded from a JSON file; every key is optional.
//!
//! ```json
//! {
//!   "codec": { "idle_speed_offset": "raw" },
//!   "start_time": "08:30:00",
//!   "output": "json"
//! }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::CodecOptions;
use crate::export::OutputFormat;

/// Errors raised while loading or interpreting a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid start time '{0}', expected HH:MM:SS")]
    InvalidStartTime(String),
}

/// Settings for one conversion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Decoder/encoder options
    pub codec: CodecOptions,
    /// First timestamp for logs that carry none (`HH:MM:SS`); local time if unset
    pub start_time: Option<String>,
    /// Format written by the command-line tool
    pub output: OutputFormat,
}

impl ConvertConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the first record time
    pub fn start_time(&self) -> Result<NaiveTime, ConfigError> {
        match &self.start_time {
            Some(text) => parse_time(text),
            None => Ok(Local::now().time()),
        }
    }
}

fn parse_time(text: &str) -> Result<NaiveTime, ConfigError> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S%.3f"))
        .map_err(|_| ConfigError::InvalidStartTime(text.to_string()))
}
