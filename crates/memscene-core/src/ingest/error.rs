//! Ingestion errors

use thiserror::Error;

use super::SourceFormat;
use crate::codec::{DecodeError, EncodeError};
use crate::config::ConfigError;
use crate::scenario::ScenarioError;

/// Why a single record was skipped
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Encode failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("Invalid value '{value}' in column {column}")]
    InvalidValue { column: String, value: String },

    #[error("Expected {expected} columns, got {actual}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("No {column} column to rebuild frames from")]
    MissingColumn { column: String },
}

/// Errors that abort a whole conversion
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unrecognized log format")]
    UnknownFormat,

    #[error("No converter for {0} logs")]
    Unsupported(SourceFormat),

    #[error("No '#time' header line found")]
    MissingHeader,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
