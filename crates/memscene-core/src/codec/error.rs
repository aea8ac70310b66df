//! Frame encoding errors

use std::fmt;

use thiserror::Error;

use crate::record::{Field, FieldValue};

/// A derived value whose raw equivalent does not fit its storage width
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    /// Offending field
    pub field: Field,
    /// Derived value as given
    pub value: FieldValue,
    /// Inverted raw value, `None` when the value was not finite
    pub raw: Option<i64>,
    /// Largest raw value the field can store
    pub max: u16,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw {
            Some(raw) => write!(
                f,
                "{} = {} encodes to {}, outside 0..={}",
                self.field.column(),
                self.value,
                raw,
                self.max
            ),
            None => write!(
                f,
                "{} = {} has no raw equivalent",
                self.field.column(),
                self.value
            ),
        }
    }
}

/// Errors that can occur while rebuilding frames from a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("{} field(s) out of range: {}", .violations.len(), join(.violations))]
    OutOfRange { violations: Vec<RangeViolation> },
}

impl EncodeError {
    /// Fields that failed the range check
    pub fn violations(&self) -> &[RangeViolation] {
        match self {
            EncodeError::OutOfRange { violations } => violations,
        }
    }
}

fn join(violations: &[RangeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
