//! Codec settings

use serde::{Deserialize, Serialize};

/// How the `0x7d` idle speed offset byte is reported
///
/// Logging tools disagree here: older readmems conversions kept the raw byte,
/// newer ones report `(raw - 128) * 25`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdleSpeedOffsetScaling {
    /// `(raw - 128) * 25`
    #[default]
    Scaled,
    /// Raw byte passed through
    Raw,
}

/// Settings that change how fields are derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Idle speed offset reporting
    pub idle_speed_offset: IdleSpeedOffsetScaling,
}
