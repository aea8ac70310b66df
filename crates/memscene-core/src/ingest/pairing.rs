//! Frame half pairing
//!
//! A record needs one `0x80` frame followed by one `0x7d` frame. Halves that
//! never complete a pair are discarded and counted.

use crate::frame::Command;

/// Hex frames for one record, ready to decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePair {
    /// Source line the pair came from (1-based, of the `0x7d` half or CSV row)
    pub line: usize,
    /// Timestamp to stamp the record with
    pub timestamp: String,
    /// `0x80` frame hex
    pub hex80: String,
    /// `0x7d` frame hex
    pub hex7d: String,
}

/// Joins `0x80`/`0x7d` halves arriving in stream order
#[derive(Debug, Default)]
pub struct FramePairer {
    pending: Option<String>,
    discarded: usize,
}

impl FramePairer {
    /// Create an empty pairer
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a half; returns `(hex80, hex7d)` once both halves are present
    ///
    /// A new `0x80` half replaces an unanswered one. A `0x7d` half with no
    /// `0x80` waiting is dropped.
    pub fn push(&mut self, command: Command, hex: String) -> Option<(String, String)> {
        match command {
            Command::Data80 => {
                if self.pending.replace(hex).is_some() {
                    tracing::debug!("discarding unpaired 0x80 half");
                    self.discarded += 1;
                }
                None
            }
            Command::Data7d => match self.pending.take() {
                Some(hex80) => Some((hex80, hex)),
                None => {
                    tracing::debug!("discarding 0x7d half with no preceding 0x80");
                    self.discarded += 1;
                    None
                }
            },
        }
    }

    /// Number of halves discarded so far
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Stop pairing; returns the total discarded halves including a trailing one
    pub fn finish(self) -> usize {
        self.discarded + usize::from(self.pending.is_some())
    }
}
