//! Per-field conversion rules
//!
//! Each rule maps a raw unsigned value to a derived value and back. The
//! inverse works only on the derived value it is given: rules that round or
//! cap (IAC position, throttle angle, coil time) cannot recover the raw byte
//! they were decoded from.

use crate::record::{FieldValue, ValueKind};

/// Conversion between a raw field and its derived value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// `raw`
    Identity,
    /// `raw + k`
    Offset(i32),
    /// `(raw + translate) * factor`
    OffsetScale { translate: i32, factor: i32 },
    /// `raw * multiplier / divisor + translate`, rounded to `decimals` when set
    Linear {
        multiplier: f64,
        divisor: f64,
        translate: f64,
        decimals: Option<i32>,
    },
    /// `round(raw * multiplier / divisor)`, capped at `max` when set
    Rounded {
        multiplier: f64,
        divisor: f64,
        max: Option<i32>,
    },
    /// `raw != 0`
    Switch,
    /// `raw & mask != 0`
    Bit(u8),
}

impl Rule {
    /// Kind of value this rule produces
    pub fn kind(&self) -> ValueKind {
        match self {
            Rule::Identity | Rule::Offset(_) | Rule::OffsetScale { .. } | Rule::Rounded { .. } => {
                ValueKind::Int
            }
            Rule::Linear { .. } => ValueKind::Float,
            Rule::Switch | Rule::Bit(_) => ValueKind::Bool,
        }
    }

    /// raw -> derived
    pub fn apply(&self, raw: u16) -> FieldValue {
        let raw_i = raw as i32;
        let raw_f = raw as f64;
        match *self {
            Rule::Identity => FieldValue::Int(raw_i),
            Rule::Offset(k) => FieldValue::Int(raw_i + k),
            Rule::OffsetScale { translate, factor } => FieldValue::Int((raw_i + translate) * factor),
            Rule::Linear {
                multiplier,
                divisor,
                translate,
                decimals,
            } => {
                let value = raw_f * multiplier / divisor + translate;
                FieldValue::Float(match decimals {
                    Some(places) => round_to(value, places),
                    None => value,
                })
            }
            Rule::Rounded {
                multiplier,
                divisor,
                max,
            } => {
                let value = (raw_f * multiplier / divisor).round() as i32;
                FieldValue::Int(match max {
                    Some(cap) => value.min(cap),
                    None => value,
                })
            }
            Rule::Switch => FieldValue::Bool(raw != 0),
            Rule::Bit(mask) => FieldValue::Bool(raw & mask as u16 != 0),
        }
    }

    /// derived -> raw
    ///
    /// Returns `None` when the value has no finite raw equivalent. The result
    /// is not range-checked; callers compare it against the field width.
    pub fn invert(&self, value: FieldValue) -> Option<i64> {
        match *self {
            Rule::Identity => Some(value.as_int() as i64),
            Rule::Offset(k) => Some(value.as_int() as i64 - k as i64),
            Rule::OffsetScale { translate, factor } => {
                let scaled = (value.as_int() as f64 / factor as f64).round() as i64;
                Some(scaled - translate as i64)
            }
            Rule::Linear {
                multiplier,
                divisor,
                translate,
                ..
            } => to_raw((value.as_float() - translate) * divisor / multiplier),
            Rule::Rounded {
                multiplier,
                divisor,
                ..
            } => to_raw(value.as_float() * divisor / multiplier),
            Rule::Switch => Some(value.as_bool() as i64),
            Rule::Bit(mask) => Some(if value.as_bool() { mask as i64 } else { 0 }),
        }
    }

    /// Whether decode(encode(v)) == v holds for every value decode can produce
    pub fn is_lossless(&self) -> bool {
        match self {
            Rule::Identity
            | Rule::Offset(_)
            | Rule::OffsetScale { .. }
            | Rule::Switch
            | Rule::Bit(_) => true,
            Rule::Linear {
                multiplier,
                decimals,
                ..
            } => match decimals {
                None => true,
                // one raw step must still be visible after rounding
                Some(places) => *multiplier >= 10f64.powi(-*places),
            },
            Rule::Rounded { .. } => false,
        }
    }
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn to_raw(value: f64) -> Option<i64> {
    let rounded = value.round();
    (rounded.is_finite() && rounded.abs() < i64::MAX as f64).then_some(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(5.434, 2), 5.43);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_offset_rule() {
        let rule = Rule::Offset(-55);
        assert_eq!(rule.apply(0), FieldValue::Int(-55));
        assert_eq!(rule.invert(FieldValue::Int(-55)), Some(0));
        assert_eq!(rule.invert(FieldValue::Int(250)), Some(305));
    }

    #[test]
    fn test_offset_scale_rule() {
        let rule = Rule::OffsetScale {
            translate: -128,
            factor: 25,
        };
        assert_eq!(rule.apply(0x84), FieldValue::Int(100));
        assert_eq!(rule.apply(0x7E), FieldValue::Int(-50));
        assert_eq!(rule.invert(FieldValue::Int(-50)), Some(0x7E));
        // values between steps round to the nearest step
        assert_eq!(rule.invert(FieldValue::Int(112)), Some(0x84));
    }

    #[test]
    fn test_linear_rule() {
        let rule = Rule::Linear {
            multiplier: 1.0,
            divisor: 2.0,
            translate: -24.0,
            decimals: None,
        };
        assert_eq!(rule.apply(41), FieldValue::Float(-3.5));
        assert_eq!(rule.invert(FieldValue::Float(-3.5)), Some(41));
        assert!(rule.invert(FieldValue::Float(f64::NAN)).is_none());
        assert!(rule.invert(FieldValue::Float(f64::INFINITY)).is_none());
    }

    #[test]
    fn test_rounded_rule_caps() {
        let rule = Rule::Rounded {
            multiplier: 1.0,
            divisor: 1.8,
            max: Some(100),
        };
        assert_eq!(rule.apply(90), FieldValue::Int(50));
        assert_eq!(rule.apply(180), FieldValue::Int(100));
        assert_eq!(rule.apply(255), FieldValue::Int(100));
        assert_eq!(rule.invert(FieldValue::Int(100)), Some(180));
        assert!(!rule.is_lossless());
    }

    #[test]
    fn test_flag_rules() {
        assert_eq!(Rule::Switch.apply(0x40), FieldValue::Bool(true));
        assert_eq!(Rule::Switch.invert(FieldValue::Bool(true)), Some(1));
        assert_eq!(Rule::Bit(0x08).apply(0xF7), FieldValue::Bool(false));
        assert_eq!(Rule::Bit(0x08).invert(FieldValue::Bool(true)), Some(0x08));
    }

    #[test]
    fn test_losslessness() {
        let throttle_pot = Rule::Linear {
            multiplier: 0.02,
            divisor: 1.0,
            translate: 0.0,
            decimals: Some(2),
        };
        let coil_time = Rule::Linear {
            multiplier: 0.002,
            divisor: 1.0,
            translate: 0.0,
            decimals: Some(2),
        };
        assert!(throttle_pot.is_lossless());
        assert!(!coil_time.is_lossless());
    }
}
