//! Shared fixtures for integration tests

#![allow(dead_code)]

use memscene_core::frame::{Command, FieldSpec, RawFrame, Width};

/// Recorded `0x80` frame from an idling engine
pub const FRAME_80: &str = "801C0ADC595D4F5A238C1E08000000007A6F2B6E00008F520A9B01A1C0";
/// Recorded `0x7d` frame taken with [`FRAME_80`]
pub const FRAME_7D: &str = "7D2001230092002AFF010301808200003000003084000000400000C00000000011";

/// Install a test-friendly subscriber so library events show up on failure
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// The two sample frames as validated frames
pub fn sample_frames() -> (RawFrame, RawFrame) {
    (
        RawFrame::from_hex(Command::Data80, FRAME_80).unwrap(),
        RawFrame::from_hex(Command::Data7d, FRAME_7D).unwrap(),
    )
}

/// Sample frames with one field's raw value replaced
pub fn frames_with(spec: &FieldSpec, raw: u16) -> (RawFrame, RawFrame) {
    let (frame80, frame7d) = sample_frames();
    let patch = |frame: RawFrame| {
        let mut bytes = frame.as_bytes().to_vec();
        let start = 1 + spec.offset as usize;
        match spec.width {
            Width::Byte => bytes[start] = raw as u8,
            Width::Word => bytes[start..start + 2].copy_from_slice(&raw.to_be_bytes()),
        }
        RawFrame::from_bytes(frame.command(), bytes).unwrap()
    };
    match spec.command {
        Command::Data80 => (patch(frame80), frame7d),
        Command::Data7d => (frame80, patch(frame7d)),
    }
}

/// A readmems console line for a hex frame
pub fn console_line(hex: &str) -> String {
    let bytes: Vec<String> = hex
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect();
    format!("{}: {}", bytes[0], bytes[1..].join(" "))
}
