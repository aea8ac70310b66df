//! Raw Diagnostic Frames
//!
//! Fixed-layout responses to the `0x80` and `0x7d` data queries.
//!
//! Frame format (as recorded by the logging tools):
//! - 1 byte: command echo (`0x80` / `0x7D`)
//! - 1 byte: response length, counting itself (`0x1C` / `0x20`)
//! - N bytes: payload
//!
//! Field offsets are relative to the response, so the length byte is offset 0
//! and engine RPM sits at offsets 1-2 of the `0x80` response.

mod error;
pub mod layout;

pub use error::DecodeError;
pub use layout::{FieldSpec, Width, FIELD_TABLE};

use byteorder::{BigEndian, ByteOrder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data query commands understood by the ECU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// `0x80`: temperatures, pressures, idle control, ignition
    Data80,
    /// `0x7D`: throttle, lambda, fuel trims, fault codes
    Data7d,
}

impl Command {
    /// Command byte sent to the ECU and echoed back
    pub const fn code(self) -> u8 {
        match self {
            Command::Data80 => 0x80,
            Command::Data7d => 0x7D,
        }
    }

    /// Size of the ECU response, including its length byte
    pub const fn response_len(self) -> usize {
        match self {
            Command::Data80 => 28,
            Command::Data7d => 32,
        }
    }

    /// Size of a recorded frame: command echo plus response
    pub const fn frame_len(self) -> usize {
        1 + self.response_len()
    }

    /// Number of hex characters in a recorded frame
    pub const fn hex_len(self) -> usize {
        2 * self.frame_len()
    }

    /// Look up a command by its byte
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x80 => Some(Command::Data80),
            0x7D => Some(Command::Data7d),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04X}", self.code())
    }
}

/// A validated raw frame for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    command: Command,
    /// Command echo followed by the response
    bytes: Vec<u8>,
}

impl RawFrame {
    /// Create a zero-filled frame with the protocol header in place
    pub fn blank(command: Command) -> Self {
        let mut bytes = vec![0u8; command.frame_len()];
        bytes[0] = command.code();
        bytes[1] = command.response_len() as u8;
        Self { command, bytes }
    }

    /// Parse a frame from hex text (either case)
    pub fn from_hex(command: Command, text: &str) -> Result<Self, DecodeError> {
        let bytes = hex::decode(text.trim()).map_err(|e| DecodeError::Malformed {
            command,
            reason: format!("invalid hex: {e}"),
        })?;
        Self::from_bytes(command, bytes)
    }

    /// Validate raw bytes as a frame for `command`
    ///
    /// The frame size is fixed by the protocol; the length byte is only
    /// checked against it.
    pub fn from_bytes(command: Command, bytes: Vec<u8>) -> Result<Self, DecodeError> {
        if bytes.len() != command.frame_len() {
            return Err(DecodeError::Malformed {
                command,
                reason: format!(
                    "expected {} bytes, got {}",
                    command.frame_len(),
                    bytes.len()
                ),
            });
        }

        if bytes[0] != command.code() {
            return Err(DecodeError::WrongCommand {
                expected: command,
                actual: bytes[0],
            });
        }

        if bytes[1] as usize != command.response_len() {
            return Err(DecodeError::Malformed {
                command,
                reason: format!(
                    "length byte {:#04x}, expected {:#04x}",
                    bytes[1],
                    command.response_len()
                ),
            });
        }

        Ok(Self { command, bytes })
    }

    /// The command this frame answers
    pub fn command(&self) -> Command {
        self.command
    }

    /// All bytes, command echo included
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The ECU response (length byte onwards)
    pub fn response(&self) -> &[u8] {
        &self.bytes[1..]
    }

    /// Read an unsigned value at a response offset
    ///
    /// Returns `None` when the value would run past the end of the response.
    pub fn read(&self, offset: u8, width: Width) -> Option<u16> {
        let start = offset as usize;
        let data = self.response().get(start..start + width.size())?;
        Some(match width {
            Width::Byte => data[0] as u16,
            Width::Word => BigEndian::read_u16(data),
        })
    }

    /// Read a field table value; table rows always lie inside the response
    pub(crate) fn field(&self, spec: &FieldSpec) -> u16 {
        let data = &self.response()[spec.offset as usize..];
        match spec.width {
            Width::Byte => data[0] as u16,
            Width::Word => BigEndian::read_u16(data),
        }
    }

    /// Write an unsigned value at a response offset
    ///
    /// The caller range-checks `raw` against `width` first.
    pub(crate) fn write(&mut self, offset: u8, width: Width, raw: u16) {
        let start = 1 + offset as usize;
        match width {
            Width::Byte => self.bytes[start] = raw as u8,
            Width::Word => BigEndian::write_u16(&mut self.bytes[start..start + 2], raw),
        }
    }

    /// Uppercase hex text of the whole frame
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.bytes)
    }
}
