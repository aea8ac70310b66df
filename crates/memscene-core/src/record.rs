//! Canonical telemetry record
//!
//! The unit-converted view of one `0x80`/`0x7d` frame pair that every legacy
//! log format converges on.

use serde::{Deserialize, Serialize};

use crate::frame::{Command, DecodeError, FieldSpec, RawFrame, FIELD_TABLE};

/// Number of derived fields in a record
pub const FIELD_COUNT: usize = 55;

/// A derived field of the canonical record
///
/// Discriminants follow canonical column order and index [`FIELD_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    EngineRpm,
    CoolantTemp,
    AmbientTemp,
    IntakeAirTemp,
    FuelTemp,
    ManifoldAbsolutePressure,
    BatteryVoltage,
    ThrottlePotSensor,
    IdleSwitch,
    AirconSwitch,
    ParkNeutralSwitch,
    Dtc0,
    Dtc1,
    IdleSetPoint,
    IdleHot,
    Uk8011,
    IacPosition,
    IdleSpeedDeviation,
    IgnitionAdvanceOffset80,
    IgnitionAdvance,
    CoilTime,
    CrankshaftPositionSensor,
    Uk801a,
    Uk801b,
    IgnitionSwitch,
    ThrottleAngle,
    Uk7d03,
    AirFuelRatio,
    Dtc2,
    LambdaVoltage,
    LambdaFrequency,
    LambdaDutycycle,
    LambdaStatus,
    ClosedLoop,
    LongTermFuelTrim,
    ShortTermFuelTrim,
    CarbonCanisterPurgeValve,
    Dtc3,
    IdleBasePosition,
    Uk7d10,
    Dtc4,
    IgnitionAdvanceOffset7d,
    IdleSpeedOffset,
    Uk7d14,
    Uk7d15,
    Dtc5,
    Uk7d17,
    Uk7d18,
    Uk7d19,
    Uk7d1a,
    Uk7d1b,
    Uk7d1c,
    Uk7d1d,
    Uk7d1e,
    JackCount,
}

impl Field {
    /// All fields in canonical column order
    pub fn all() -> impl Iterator<Item = Field> {
        FIELD_TABLE.iter().map(|spec| spec.field)
    }

    /// Layout and rule for this field
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_TABLE[self as usize]
    }

    /// Frame the raw value lives in
    pub fn command(self) -> Command {
        self.spec().command
    }

    /// Kind of value the field holds once derived
    pub fn kind(self) -> ValueKind {
        self.spec().rule.kind()
    }

    /// Canonical column name: source command, byte offset and meaning
    pub fn column(self) -> &'static str {
        self.names().0
    }

    /// Column name used by mems-rosco v1 logs, if that tool logged the field
    pub fn rosco_column(self) -> Option<&'static str> {
        self.names().1
    }

    /// Resolve a canonical or mems-rosco v1 column name
    pub fn from_column(name: &str) -> Option<Field> {
        let name = name.trim();
        Field::all().find(|f| f.column() == name || f.rosco_column() == Some(name))
    }

    fn names(self) -> (&'static str, Option<&'static str>) {
        match self {
            Field::EngineRpm => ("80x01-02_engine-rpm", Some("engine-rpm")),
            Field::CoolantTemp => ("80x03_coolant_temp", Some("coolant_temp")),
            Field::AmbientTemp => ("80x04_ambient_temp", Some("ambient_temp")),
            Field::IntakeAirTemp => ("80x05_intake_air_temp", Some("intake_air_temp")),
            Field::FuelTemp => ("80x06_fuel_temp", Some("fuel_temp")),
            Field::ManifoldAbsolutePressure => ("80x07_map_kpa", Some("map_kpa")),
            Field::BatteryVoltage => ("80x08_battery_voltage", Some("battery_voltage")),
            Field::ThrottlePotSensor => ("80x09_throttle_pot", Some("throttle_pot_voltage")),
            Field::IdleSwitch => ("80x0A_idle_switch", Some("idle_switch")),
            Field::AirconSwitch => ("80x0B_uk1", Some("uk1")),
            Field::ParkNeutralSwitch => ("80x0C_park_neutral_switch", Some("park_neutral_switch")),
            Field::Dtc0 => ("80x0D-0E_fault_codes", Some("fault_codes")),
            Field::Dtc1 => ("80x0E_dtc1", None),
            Field::IdleSetPoint => ("80x0F_idle_set_point", Some("idle_set_point")),
            Field::IdleHot => ("80x10_idle_hot", Some("idle_hot")),
            Field::Uk8011 => ("80x11_uk2", Some("uk2")),
            Field::IacPosition => ("80x12_iac_position", Some("iac_position")),
            Field::IdleSpeedDeviation => ("80x13-14_idle_error", Some("idle_error")),
            Field::IgnitionAdvanceOffset80 => {
                ("80x15_ignition_advance_offset", Some("ignition_advance_offset"))
            }
            Field::IgnitionAdvance => ("80x16_ignition_advance", Some("ignition_advance")),
            Field::CoilTime => ("80x17-18_coil_time", Some("coil_time")),
            Field::CrankshaftPositionSensor => ("80x19_crankshaft_position_sensor", Some("crancs")),
            Field::Uk801a => ("80x1A_uk4", Some("uk4")),
            Field::Uk801b => ("80x1B_uk5", Some("uk5")),
            Field::IgnitionSwitch => ("7dx01_ignition_switch", Some("ignition_switch")),
            Field::ThrottleAngle => ("7dx02_throttle_angle", Some("throttle_angle")),
            Field::Uk7d03 => ("7dx03_uk6", Some("uk6")),
            Field::AirFuelRatio => ("7dx04_air_fuel_ratio", Some("air_fuel_ratio")),
            Field::Dtc2 => ("7dx05_dtc2", Some("fault_code0")),
            Field::LambdaVoltage => ("7dx06_lambda_voltage", Some("lambda_voltage_mv")),
            Field::LambdaFrequency => {
                ("7dx07_lambda_sensor_frequency", Some("lambda_sensor_frequency"))
            }
            Field::LambdaDutycycle => {
                ("7dx08_lambda_sensor_dutycycle", Some("lambda_sensor_dutycycle"))
            }
            Field::LambdaStatus => ("7dx09_lambda_sensor_status", Some("lambda_sensor_status")),
            Field::ClosedLoop => ("7dx0A_closed_loop", Some("closed_loop")),
            Field::LongTermFuelTrim => ("7dx0B_long_term_fuel_trim", Some("long_term_fuel_trim")),
            Field::ShortTermFuelTrim => {
                ("7dx0C_short_term_fuel_trim", Some("short_term_fuel_trim"))
            }
            Field::CarbonCanisterPurgeValve => {
                ("7dx0D_carbon_canister_dutycycle", Some("carbon_canister_dutycycle"))
            }
            Field::Dtc3 => ("7dx0E_dtc3", Some("fault_code1")),
            Field::IdleBasePosition => ("7dx0F_idle_base_pos", Some("idle_base_pos")),
            Field::Uk7d10 => ("7dx10_uk7", Some("uk7")),
            Field::Dtc4 => ("7dx11_dtc4", Some("uk8")),
            Field::IgnitionAdvanceOffset7d => ("7dx12_ignition_advance2", Some("ignition_advance2")),
            Field::IdleSpeedOffset => ("7dx13_idle_speed_offset", Some("uk9")),
            Field::Uk7d14 => ("7dx14_idle_error2", Some("idle_error2")),
            Field::Uk7d15 => ("7dx14-15_uk10", Some("uk10")),
            Field::Dtc5 => ("7dx16_dtc5", Some("fault_code4")),
            Field::Uk7d17 => ("7dx17_uk11", Some("uk11")),
            Field::Uk7d18 => ("7dx18_uk12", Some("uk12")),
            Field::Uk7d19 => ("7dx19_uk13", Some("uk13")),
            Field::Uk7d1a => ("7dx1A_uk14", Some("uk14")),
            Field::Uk7d1b => ("7dx1B_uk15", Some("uk15")),
            Field::Uk7d1c => ("7dx1C_uk16", Some("uk16")),
            Field::Uk7d1d => ("7dx1D_uk17", Some("uk17")),
            Field::Uk7d1e => ("7dx1E_uk18", Some("uk18")),
            Field::JackCount => ("7dx1F_uk19", Some("uk19")),
        }
    }
}

/// Kind of a derived value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Whole number
    Int,
    /// Fixed-point quantity carried as a float
    Float,
    /// Flag
    Bool,
}

impl ValueKind {
    /// Parse a value of this kind from log text
    ///
    /// Flags accept `true`/`false` as well as numbers (non-zero is set);
    /// integers accept a decimal form only when it has no fractional part.
    pub fn parse(self, text: &str) -> Option<FieldValue> {
        let text = text.trim();
        match self {
            ValueKind::Int => text
                .parse::<i32>()
                .ok()
                .or_else(|| {
                    let v = text.parse::<f64>().ok()?;
                    (v.is_finite() && v.fract() == 0.0 && v.abs() <= i32::MAX as f64)
                        .then_some(v as i32)
                })
                .map(FieldValue::Int),
            ValueKind::Float => text
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FieldValue::Float),
            ValueKind::Bool => match text.to_ascii_lowercase().as_str() {
                "true" => Some(FieldValue::Bool(true)),
                "false" => Some(FieldValue::Bool(false)),
                other => other.parse::<f64>().ok().map(|v| FieldValue::Bool(v != 0.0)),
            },
        }
    }
}

/// A derived field value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Whole number
    Int(i32),
    /// Scaled quantity
    Float(f64),
    /// Flag
    Bool(bool),
}

impl FieldValue {
    /// Value as a whole number (floats round half away from zero)
    pub fn as_int(&self) -> i32 {
        match self {
            FieldValue::Int(v) => *v,
            FieldValue::Float(v) => v.round() as i32,
            FieldValue::Bool(v) => *v as i32,
        }
    }

    /// Value as a float
    pub fn as_float(&self) -> f64 {
        match self {
            FieldValue::Int(v) => *v as f64,
            FieldValue::Float(v) => *v,
            FieldValue::Bool(v) => *v as i32 as f64,
        }
    }

    /// Value as a flag (non-zero is set)
    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Int(v) => *v != 0,
            FieldValue::Float(v) => *v != 0.0,
            FieldValue::Bool(v) => *v,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Canonical record derived from one `0x80`/`0x7d` frame pair
///
/// Serialized field names are the canonical CSV column names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    #[serde(rename = "#time")]
    pub time: String,
    #[serde(rename = "80x01-02_engine-rpm")]
    pub engine_rpm: i32,
    #[serde(rename = "80x03_coolant_temp")]
    pub coolant_temp: i32,
    #[serde(rename = "80x04_ambient_temp")]
    pub ambient_temp: i32,
    #[serde(rename = "80x05_intake_air_temp")]
    pub intake_air_temp: i32,
    #[serde(rename = "80x06_fuel_temp")]
    pub fuel_temp: i32,
    #[serde(rename = "80x07_map_kpa")]
    pub manifold_absolute_pressure: f64,
    #[serde(rename = "80x08_battery_voltage")]
    pub battery_voltage: f64,
    #[serde(rename = "80x09_throttle_pot")]
    pub throttle_pot_sensor: f64,
    #[serde(rename = "80x0A_idle_switch")]
    pub idle_switch: bool,
    #[serde(rename = "80x0B_uk1")]
    pub aircon_switch: bool,
    #[serde(rename = "80x0C_park_neutral_switch")]
    pub park_neutral_switch: bool,
    #[serde(rename = "80x0D-0E_fault_codes")]
    pub dtc0: i32,
    #[serde(rename = "80x0E_dtc1")]
    pub dtc1: i32,
    #[serde(rename = "80x0F_idle_set_point")]
    pub idle_set_point: i32,
    #[serde(rename = "80x10_idle_hot")]
    pub idle_hot: i32,
    #[serde(rename = "80x11_uk2")]
    pub uk8011: i32,
    /// Percent open, capped at 100
    #[serde(rename = "80x12_iac_position")]
    pub iac_position: i32,
    #[serde(rename = "80x13-14_idle_error")]
    pub idle_speed_deviation: i32,
    #[serde(rename = "80x15_ignition_advance_offset")]
    pub ignition_advance_offset80: i32,
    /// Degrees, half-degree resolution
    #[serde(rename = "80x16_ignition_advance")]
    pub ignition_advance: f64,
    /// Milliseconds
    #[serde(rename = "80x17-18_coil_time")]
    pub coil_time: f64,
    #[serde(rename = "80x19_crankshaft_position_sensor")]
    pub crankshaft_position_sensor: bool,
    #[serde(rename = "80x1A_uk4")]
    pub uk801a: i32,
    #[serde(rename = "80x1B_uk5")]
    pub uk801b: i32,
    #[serde(rename = "7dx01_ignition_switch")]
    pub ignition_switch: bool,
    #[serde(rename = "7dx02_throttle_angle")]
    pub throttle_angle: i32,
    #[serde(rename = "7dx03_uk6")]
    pub uk7d03: i32,
    #[serde(rename = "7dx04_air_fuel_ratio")]
    pub air_fuel_ratio: f64,
    #[serde(rename = "7dx05_dtc2")]
    pub dtc2: i32,
    /// Millivolts
    #[serde(rename = "7dx06_lambda_voltage")]
    pub lambda_voltage: i32,
    #[serde(rename = "7dx07_lambda_sensor_frequency")]
    pub lambda_frequency: i32,
    #[serde(rename = "7dx08_lambda_sensor_dutycycle")]
    pub lambda_dutycycle: i32,
    #[serde(rename = "7dx09_lambda_sensor_status")]
    pub lambda_status: i32,
    #[serde(rename = "7dx0A_closed_loop")]
    pub closed_loop: bool,
    #[serde(rename = "7dx0B_long_term_fuel_trim")]
    pub long_term_fuel_trim: i32,
    #[serde(rename = "7dx0C_short_term_fuel_trim")]
    pub short_term_fuel_trim: i32,
    #[serde(rename = "7dx0D_carbon_canister_dutycycle")]
    pub carbon_canister_purge_valve: i32,
    #[serde(rename = "7dx0E_dtc3")]
    pub dtc3: i32,
    #[serde(rename = "7dx0F_idle_base_pos")]
    pub idle_base_position: i32,
    #[serde(rename = "7dx10_uk7")]
    pub uk7d10: i32,
    #[serde(rename = "7dx11_dtc4")]
    pub dtc4: i32,
    #[serde(rename = "7dx12_ignition_advance2")]
    pub ignition_advance_offset7d: i32,
    #[serde(rename = "7dx13_idle_speed_offset")]
    pub idle_speed_offset: i32,
    #[serde(rename = "7dx14_idle_error2")]
    pub uk7d14: i32,
    #[serde(rename = "7dx14-15_uk10")]
    pub uk7d15: i32,
    #[serde(rename = "7dx16_dtc5")]
    pub dtc5: i32,
    #[serde(rename = "7dx17_uk11")]
    pub uk7d17: i32,
    #[serde(rename = "7dx18_uk12")]
    pub uk7d18: i32,
    #[serde(rename = "7dx19_uk13")]
    pub uk7d19: i32,
    #[serde(rename = "7dx1A_uk14")]
    pub uk7d1a: i32,
    #[serde(rename = "7dx1B_uk15")]
    pub uk7d1b: i32,
    #[serde(rename = "7dx1C_uk16")]
    pub uk7d1c: i32,
    #[serde(rename = "7dx1D_uk17")]
    pub uk7d1d: i32,
    #[serde(rename = "7dx1E_uk18")]
    pub uk7d1e: i32,
    #[serde(rename = "7dx1F_uk19")]
    pub jack_count: i32,
    /// Source `0x7d` frame, uppercase hex
    #[serde(rename = "0x7d_raw")]
    pub frame7d: String,
    /// Source `0x80` frame, uppercase hex
    #[serde(rename = "0x80_raw")]
    pub frame80: String,
}

impl TelemetryRecord {
    /// Read a derived field
    pub fn get(&self, field: Field) -> FieldValue {
        use FieldValue::{Bool, Float, Int};

        match field {
            Field::EngineRpm => Int(self.engine_rpm),
            Field::CoolantTemp => Int(self.coolant_temp),
            Field::AmbientTemp => Int(self.ambient_temp),
            Field::IntakeAirTemp => Int(self.intake_air_temp),
            Field::FuelTemp => Int(self.fuel_temp),
            Field::ManifoldAbsolutePressure => Float(self.manifold_absolute_pressure),
            Field::BatteryVoltage => Float(self.battery_voltage),
            Field::ThrottlePotSensor => Float(self.throttle_pot_sensor),
            Field::IdleSwitch => Bool(self.idle_switch),
            Field::AirconSwitch => Bool(self.aircon_switch),
            Field::ParkNeutralSwitch => Bool(self.park_neutral_switch),
            Field::Dtc0 => Int(self.dtc0),
            Field::Dtc1 => Int(self.dtc1),
            Field::IdleSetPoint => Int(self.idle_set_point),
            Field::IdleHot => Int(self.idle_hot),
            Field::Uk8011 => Int(self.uk8011),
            Field::IacPosition => Int(self.iac_position),
            Field::IdleSpeedDeviation => Int(self.idle_speed_deviation),
            Field::IgnitionAdvanceOffset80 => Int(self.ignition_advance_offset80),
            Field::IgnitionAdvance => Float(self.ignition_advance),
            Field::CoilTime => Float(self.coil_time),
            Field::CrankshaftPositionSensor => Bool(self.crankshaft_position_sensor),
            Field::Uk801a => Int(self.uk801a),
            Field::Uk801b => Int(self.uk801b),
            Field::IgnitionSwitch => Bool(self.ignition_switch),
            Field::ThrottleAngle => Int(self.throttle_angle),
            Field::Uk7d03 => Int(self.uk7d03),
            Field::AirFuelRatio => Float(self.air_fuel_ratio),
            Field::Dtc2 => Int(self.dtc2),
            Field::LambdaVoltage => Int(self.lambda_voltage),
            Field::LambdaFrequency => Int(self.lambda_frequency),
            Field::LambdaDutycycle => Int(self.lambda_dutycycle),
            Field::LambdaStatus => Int(self.lambda_status),
            Field::ClosedLoop => Bool(self.closed_loop),
            Field::LongTermFuelTrim => Int(self.long_term_fuel_trim),
            Field::ShortTermFuelTrim => Int(self.short_term_fuel_trim),
            Field::CarbonCanisterPurgeValve => Int(self.carbon_canister_purge_valve),
            Field::Dtc3 => Int(self.dtc3),
            Field::IdleBasePosition => Int(self.idle_base_position),
            Field::Uk7d10 => Int(self.uk7d10),
            Field::Dtc4 => Int(self.dtc4),
            Field::IgnitionAdvanceOffset7d => Int(self.ignition_advance_offset7d),
            Field::IdleSpeedOffset => Int(self.idle_speed_offset),
            Field::Uk7d14 => Int(self.uk7d14),
            Field::Uk7d15 => Int(self.uk7d15),
            Field::Dtc5 => Int(self.dtc5),
            Field::Uk7d17 => Int(self.uk7d17),
            Field::Uk7d18 => Int(self.uk7d18),
            Field::Uk7d19 => Int(self.uk7d19),
            Field::Uk7d1a => Int(self.uk7d1a),
            Field::Uk7d1b => Int(self.uk7d1b),
            Field::Uk7d1c => Int(self.uk7d1c),
            Field::Uk7d1d => Int(self.uk7d1d),
            Field::Uk7d1e => Int(self.uk7d1e),
            Field::JackCount => Int(self.jack_count),
        }
    }

    /// Store a derived field, coercing the value to the field's type
    pub fn set(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::EngineRpm => self.engine_rpm = value.as_int(),
            Field::CoolantTemp => self.coolant_temp = value.as_int(),
            Field::AmbientTemp => self.ambient_temp = value.as_int(),
            Field::IntakeAirTemp => self.intake_air_temp = value.as_int(),
            Field::FuelTemp => self.fuel_temp = value.as_int(),
            Field::ManifoldAbsolutePressure => self.manifold_absolute_pressure = value.as_float(),
            Field::BatteryVoltage => self.battery_voltage = value.as_float(),
            Field::ThrottlePotSensor => self.throttle_pot_sensor = value.as_float(),
            Field::IdleSwitch => self.idle_switch = value.as_bool(),
            Field::AirconSwitch => self.aircon_switch = value.as_bool(),
            Field::ParkNeutralSwitch => self.park_neutral_switch = value.as_bool(),
            Field::Dtc0 => self.dtc0 = value.as_int(),
            Field::Dtc1 => self.dtc1 = value.as_int(),
            Field::IdleSetPoint => self.idle_set_point = value.as_int(),
            Field::IdleHot => self.idle_hot = value.as_int(),
            Field::Uk8011 => self.uk8011 = value.as_int(),
            Field::IacPosition => self.iac_position = value.as_int(),
            Field::IdleSpeedDeviation => self.idle_speed_deviation = value.as_int(),
            Field::IgnitionAdvanceOffset80 => self.ignition_advance_offset80 = value.as_int(),
            Field::IgnitionAdvance => self.ignition_advance = value.as_float(),
            Field::CoilTime => self.coil_time = value.as_float(),
            Field::CrankshaftPositionSensor => self.crankshaft_position_sensor = value.as_bool(),
            Field::Uk801a => self.uk801a = value.as_int(),
            Field::Uk801b => self.uk801b = value.as_int(),
            Field::IgnitionSwitch => self.ignition_switch = value.as_bool(),
            Field::ThrottleAngle => self.throttle_angle = value.as_int(),
            Field::Uk7d03 => self.uk7d03 = value.as_int(),
            Field::AirFuelRatio => self.air_fuel_ratio = value.as_float(),
            Field::Dtc2 => self.dtc2 = value.as_int(),
            Field::LambdaVoltage => self.lambda_voltage = value.as_int(),
            Field::LambdaFrequency => self.lambda_frequency = value.as_int(),
            Field::LambdaDutycycle => self.lambda_dutycycle = value.as_int(),
            Field::LambdaStatus => self.lambda_status = value.as_int(),
            Field::ClosedLoop => self.closed_loop = value.as_bool(),
            Field::LongTermFuelTrim => self.long_term_fuel_trim = value.as_int(),
            Field::ShortTermFuelTrim => self.short_term_fuel_trim = value.as_int(),
            Field::CarbonCanisterPurgeValve => self.carbon_canister_purge_valve = value.as_int(),
            Field::Dtc3 => self.dtc3 = value.as_int(),
            Field::IdleBasePosition => self.idle_base_position = value.as_int(),
            Field::Uk7d10 => self.uk7d10 = value.as_int(),
            Field::Dtc4 => self.dtc4 = value.as_int(),
            Field::IgnitionAdvanceOffset7d => self.ignition_advance_offset7d = value.as_int(),
            Field::IdleSpeedOffset => self.idle_speed_offset = value.as_int(),
            Field::Uk7d14 => self.uk7d14 = value.as_int(),
            Field::Uk7d15 => self.uk7d15 = value.as_int(),
            Field::Dtc5 => self.dtc5 = value.as_int(),
            Field::Uk7d17 => self.uk7d17 = value.as_int(),
            Field::Uk7d18 => self.uk7d18 = value.as_int(),
            Field::Uk7d19 => self.uk7d19 = value.as_int(),
            Field::Uk7d1a => self.uk7d1a = value.as_int(),
            Field::Uk7d1b => self.uk7d1b = value.as_int(),
            Field::Uk7d1c => self.uk7d1c = value.as_int(),
            Field::Uk7d1d => self.uk7d1d = value.as_int(),
            Field::Uk7d1e => self.uk7d1e = value.as_int(),
            Field::JackCount => self.jack_count = value.as_int(),
        }
    }

    /// Re-parse the source frames kept alongside the derived fields
    pub fn raw_frames(&self) -> Result<(RawFrame, RawFrame), DecodeError> {
        Ok((
            RawFrame::from_hex(Command::Data80, &self.frame80)?,
            RawFrame::from_hex(Command::Data7d, &self.frame7d)?,
        ))
    }
}
