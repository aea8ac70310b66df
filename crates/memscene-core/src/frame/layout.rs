//! Byte-exact field maps for the `0x80` and `0x7d` responses
//!
//! One row per derived field. The decoder and encoder both walk this table,
//! so every field's forward and inverse rule live in exactly one place.

use super::Command;
use crate::codec::Rule;
use crate::record::{Field, FIELD_COUNT};

/// Storage width of a raw field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Single unsigned byte
    Byte,
    /// Big-endian unsigned 16-bit word
    Word,
}

impl Width {
    /// Size in bytes
    pub const fn size(self) -> usize {
        match self {
            Width::Byte => 1,
            Width::Word => 2,
        }
    }

    /// Largest raw value the width can hold
    pub const fn max(self) -> u16 {
        match self {
            Width::Byte => u8::MAX as u16,
            Width::Word => u16::MAX,
        }
    }
}

/// Location and conversion rule of one derived field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Derived field
    pub field: Field,
    /// Frame holding the raw value
    pub command: Command,
    /// Offset into the response (length byte = 0)
    pub offset: u8,
    /// Raw storage width
    pub width: Width,
    /// raw <-> derived conversion
    pub rule: Rule,
}

const fn byte(field: Field, command: Command, offset: u8, rule: Rule) -> FieldSpec {
    FieldSpec {
        field,
        command,
        offset,
        width: Width::Byte,
        rule,
    }
}

const fn word(field: Field, command: Command, offset: u8, rule: Rule) -> FieldSpec {
    FieldSpec {
        field,
        command,
        offset,
        width: Width::Word,
        rule,
    }
}

/// Temperatures are reported with a +55 °C bias
const TEMPERATURE: Rule = Rule::Offset(-55);

/// `raw / 10`
const TENTHS: Rule = Rule::Linear {
    multiplier: 1.0,
    divisor: 10.0,
    translate: 0.0,
    decimals: None,
};

/// IdleSwitch is bit 3 of its byte
pub const IDLE_SWITCH_MASK: u8 = 0b0000_1000;

use Command::{Data7d, Data80};

/// Every derived field, in canonical column order
///
/// Row `n` describes the field whose discriminant is `n`.
pub static FIELD_TABLE: [FieldSpec; FIELD_COUNT] = [
    // 0x80 response
    word(Field::EngineRpm, Data80, 0x01, Rule::Identity),
    byte(Field::CoolantTemp, Data80, 0x03, TEMPERATURE),
    byte(Field::AmbientTemp, Data80, 0x04, TEMPERATURE),
    byte(Field::IntakeAirTemp, Data80, 0x05, TEMPERATURE),
    byte(Field::FuelTemp, Data80, 0x06, TEMPERATURE),
    byte(
        Field::ManifoldAbsolutePressure,
        Data80,
        0x07,
        Rule::Linear {
            multiplier: 1.0,
            divisor: 1.0,
            translate: 0.0,
            decimals: None,
        },
    ),
    byte(Field::BatteryVoltage, Data80, 0x08, TENTHS),
    byte(
        Field::ThrottlePotSensor,
        Data80,
        0x09,
        Rule::Linear {
            multiplier: 0.02,
            divisor: 1.0,
            translate: 0.0,
            decimals: Some(2),
        },
    ),
    byte(Field::IdleSwitch, Data80, 0x0A, Rule::Bit(IDLE_SWITCH_MASK)),
    byte(Field::AirconSwitch, Data80, 0x0B, Rule::Switch),
    byte(Field::ParkNeutralSwitch, Data80, 0x0C, Rule::Switch),
    byte(Field::Dtc0, Data80, 0x0D, Rule::Identity),
    byte(Field::Dtc1, Data80, 0x0E, Rule::Identity),
    byte(Field::IdleSetPoint, Data80, 0x0F, Rule::Identity),
    byte(Field::IdleHot, Data80, 0x10, Rule::Offset(-35)),
    byte(Field::Uk8011, Data80, 0x11, Rule::Identity),
    // stepper position 0-180, reported as percent open
    byte(
        Field::IacPosition,
        Data80,
        0x12,
        Rule::Rounded {
            multiplier: 1.0,
            divisor: 1.8,
            max: Some(100),
        },
    ),
    word(Field::IdleSpeedDeviation, Data80, 0x13, Rule::Identity),
    byte(Field::IgnitionAdvanceOffset80, Data80, 0x15, Rule::Identity),
    byte(
        Field::IgnitionAdvance,
        Data80,
        0x16,
        Rule::Linear {
            multiplier: 1.0,
            divisor: 2.0,
            translate: -24.0,
            decimals: None,
        },
    ),
    word(
        Field::CoilTime,
        Data80,
        0x17,
        Rule::Linear {
            multiplier: 0.002,
            divisor: 1.0,
            translate: 0.0,
            decimals: Some(2),
        },
    ),
    byte(Field::CrankshaftPositionSensor, Data80, 0x19, Rule::Switch),
    byte(Field::Uk801a, Data80, 0x1A, Rule::Identity),
    byte(Field::Uk801b, Data80, 0x1B, Rule::Identity),
    // 0x7d response
    byte(Field::IgnitionSwitch, Data7d, 0x01, Rule::Switch),
    byte(
        Field::ThrottleAngle,
        Data7d,
        0x02,
        Rule::Rounded {
            multiplier: 6.0,
            divisor: 10.0,
            max: None,
        },
    ),
    byte(Field::Uk7d03, Data7d, 0x03, Rule::Identity),
    byte(Field::AirFuelRatio, Data7d, 0x04, TENTHS),
    byte(Field::Dtc2, Data7d, 0x05, Rule::Identity),
    byte(
        Field::LambdaVoltage,
        Data7d,
        0x06,
        Rule::OffsetScale {
            translate: 0,
            factor: 5,
        },
    ),
    byte(Field::LambdaFrequency, Data7d, 0x07, Rule::Identity),
    byte(Field::LambdaDutycycle, Data7d, 0x08, Rule::Identity),
    byte(Field::LambdaStatus, Data7d, 0x09, Rule::Identity),
    byte(Field::ClosedLoop, Data7d, 0x0A, Rule::Switch),
    byte(Field::LongTermFuelTrim, Data7d, 0x0B, Rule::Offset(-128)),
    byte(Field::ShortTermFuelTrim, Data7d, 0x0C, Rule::Identity),
    byte(Field::CarbonCanisterPurgeValve, Data7d, 0x0D, Rule::Identity),
    byte(Field::Dtc3, Data7d, 0x0E, Rule::Identity),
    byte(Field::IdleBasePosition, Data7d, 0x0F, Rule::Identity),
    byte(Field::Uk7d10, Data7d, 0x10, Rule::Identity),
    byte(Field::Dtc4, Data7d, 0x11, Rule::Identity),
    byte(Field::IgnitionAdvanceOffset7d, Data7d, 0x12, Rule::Offset(-48)),
    byte(
        Field::IdleSpeedOffset,
        Data7d,
        0x13,
        Rule::OffsetScale {
            translate: -128,
            factor: 25,
        },
    ),
    byte(Field::Uk7d14, Data7d, 0x14, Rule::Identity),
    byte(Field::Uk7d15, Data7d, 0x15, Rule::Identity),
    byte(Field::Dtc5, Data7d, 0x16, Rule::Identity),
    byte(Field::Uk7d17, Data7d, 0x17, Rule::Identity),
    byte(Field::Uk7d18, Data7d, 0x18, Rule::Identity),
    byte(Field::Uk7d19, Data7d, 0x19, Rule::Identity),
    byte(Field::Uk7d1a, Data7d, 0x1A, Rule::Identity),
    byte(Field::Uk7d1b, Data7d, 0x1B, Rule::Identity),
    byte(Field::Uk7d1c, Data7d, 0x1C, Rule::Identity),
    byte(Field::Uk7d1d, Data7d, 0x1D, Rule::Identity),
    byte(Field::Uk7d1e, Data7d, 0x1E, Rule::Identity),
    byte(Field::JackCount, Data7d, 0x1F, Rule::Identity),
];
