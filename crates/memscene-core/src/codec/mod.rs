//! Frame Codec
//!
//! Converts between raw `0x80`/`0x7d` frames and [`TelemetryRecord`]s.
//!
//! Both directions walk [`FIELD_TABLE`](crate::frame::FIELD_TABLE): decoding
//! applies each row's rule to the raw value at its offset, encoding inverts
//! the rule and range-checks the result against the row's width. Encoding is
//! exact for offset and identity fields; fields whose rule rounds or caps are
//! encoded from the derived value as given and may not reproduce the original
//! raw byte.

mod error;
mod options;
mod rules;

pub use crate::frame::DecodeError;
pub use error::{EncodeError, RangeViolation};
pub use options::{CodecOptions, IdleSpeedOffsetScaling};
pub use rules::{round_to, Rule};

use crate::frame::{Command, FieldSpec, RawFrame, FIELD_TABLE};
use crate::record::{Field, TelemetryRecord};

/// Decoder/encoder for frame pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCodec {
    options: CodecOptions,
}

impl FrameCodec {
    /// Create a codec with the given options
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Active options
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Rule for a table row under the active options
    pub fn rule_for(&self, spec: &FieldSpec) -> Rule {
        match (spec.field, self.options.idle_speed_offset) {
            (Field::IdleSpeedOffset, IdleSpeedOffsetScaling::Raw) => Rule::Identity,
            _ => spec.rule,
        }
    }

    /// Decode a pair of hex frames into a record
    pub fn decode(
        &self,
        hex80: &str,
        hex7d: &str,
        timestamp: impl Into<String>,
    ) -> Result<TelemetryRecord, DecodeError> {
        let frame80 = RawFrame::from_hex(Command::Data80, hex80)?;
        let frame7d = RawFrame::from_hex(Command::Data7d, hex7d)?;
        Ok(self.decode_frames(&frame80, &frame7d, timestamp))
    }

    /// Decode a pair of validated frames into a record
    pub fn decode_frames(
        &self,
        frame80: &RawFrame,
        frame7d: &RawFrame,
        timestamp: impl Into<String>,
    ) -> TelemetryRecord {
        let mut record = TelemetryRecord {
            time: timestamp.into(),
            frame80: frame80.to_hex(),
            frame7d: frame7d.to_hex(),
            ..Default::default()
        };

        for spec in FIELD_TABLE.iter() {
            let frame = match spec.command {
                Command::Data80 => frame80,
                Command::Data7d => frame7d,
            };
            let raw = frame.field(spec);
            record.set(spec.field, self.rule_for(spec).apply(raw));
        }

        tracing::trace!(time = %record.time, rpm = record.engine_rpm, "decoded frame pair");
        record
    }

    /// Rebuild both hex frames from a record's derived fields
    pub fn encode(&self, record: &TelemetryRecord) -> Result<(String, String), EncodeError> {
        let (frame80, frame7d) = self.encode_frames(record)?;
        Ok((frame80.to_hex(), frame7d.to_hex()))
    }

    /// Rebuild both frames from a record's derived fields
    ///
    /// Every field is checked; all violations are reported together and no
    /// frame is produced if any field is out of range.
    pub fn encode_frames(
        &self,
        record: &TelemetryRecord,
    ) -> Result<(RawFrame, RawFrame), EncodeError> {
        let mut frame80 = RawFrame::blank(Command::Data80);
        let mut frame7d = RawFrame::blank(Command::Data7d);
        let mut violations = Vec::new();

        for spec in FIELD_TABLE.iter() {
            let value = record.get(spec.field);
            let max = spec.width.max();
            match self.rule_for(spec).invert(value) {
                Some(raw) if (0..=max as i64).contains(&raw) => {
                    let frame = match spec.command {
                        Command::Data80 => &mut frame80,
                        Command::Data7d => &mut frame7d,
                    };
                    frame.write(spec.offset, spec.width, raw as u16);
                }
                raw => violations.push(RangeViolation {
                    field: spec.field,
                    value,
                    raw,
                    max,
                }),
            }
        }

        if violations.is_empty() {
            Ok((frame80, frame7d))
        } else {
            Err(EncodeError::OutOfRange { violations })
        }
    }
}

/// Decode a pair of hex frames with default options
pub fn decode(
    hex80: &str,
    hex7d: &str,
    timestamp: impl Into<String>,
) -> Result<TelemetryRecord, DecodeError> {
    FrameCodec::default().decode(hex80, hex7d, timestamp)
}

/// Rebuild `(hex80, hex7d)` from a record with default options
pub fn encode(record: &TelemetryRecord) -> Result<(String, String), EncodeError> {
    FrameCodec::default().encode(record)
}
