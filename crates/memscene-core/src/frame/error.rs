//! Frame decoding errors

use thiserror::Error;

use super::Command;

/// Errors that can occur while turning hex text into a frame
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed {command} frame: {reason}")]
    Malformed { command: Command, reason: String },

    #[error("Wrong command byte: expected {expected}, got {actual:#04X}")]
    WrongCommand { expected: Command, actual: u8 },
}

impl DecodeError {
    /// The command whose frame failed to decode
    pub fn command(&self) -> Command {
        match self {
            DecodeError::Malformed { command, .. } => *command,
            DecodeError::WrongCommand { expected, .. } => *expected,
        }
    }
}
