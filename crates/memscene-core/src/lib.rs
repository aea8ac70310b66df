//! # MemScene Core Library
//!
//! Decoding and re-encoding of Rover MEMS 1.6 diagnostic telemetry.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - The `0x80`/`0x7d` raw frame layouts and a table-driven codec
//! - A canonical per-sample record and a replayable scenario
//! - Detection and conversion of legacy logging-tool output
//! - Canonical CSV and JSON export
//!
//! ## Supported logs
//!
//! - readmems console dumps
//! - mems-rosco CSV (both column layouts)
//! - Canonical memsfcr CSV, with or without raw frames
//!
//! ## Example
//!
//! ```rust,ignore
//! use memscene_core::prelude::*;
//!
//! let conversion = convert_file("readmems.txt", &ConvertConfig::default())?;
//! let mut scenario = conversion.scenario;
//!
//! // Replays forever
//! let record = scenario.next().unwrap();
//! println!("RPM: {}", record.engine_rpm);
//! ```

pub mod codec;
pub mod config;
pub mod export;
pub mod frame;
pub mod ingest;
pub mod record;
pub mod scenario;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::codec::{decode, encode, CodecOptions, FrameCodec, IdleSpeedOffsetScaling};
    pub use crate::config::ConvertConfig;
    pub use crate::export::OutputFormat;
    pub use crate::frame::{Command, RawFrame};
    pub use crate::ingest::{convert, convert_file, Conversion, ConversionReport, SourceFormat};
    pub use crate::record::{Field, FieldValue, TelemetryRecord};
    pub use crate::scenario::Scenario;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
