//! End-to-end conversion of each supported log format

mod common;

use common::{console_line, init_tracing, FRAME_7D, FRAME_80};
use memscene_core::codec::{self, IdleSpeedOffsetScaling};
use memscene_core::config::ConvertConfig;
use memscene_core::export::{self, csv_header, csv_row, OutputFormat};
use memscene_core::ingest::{convert, convert_file, IngestError, RecordError, SourceFormat};
use memscene_core::record::{Field, TelemetryRecord};
use memscene_core::scenario::{Scenario, ScenarioError};
use pretty_assertions::assert_eq;

fn config(start: &str) -> ConvertConfig {
    ConvertConfig {
        start_time: Some(start.into()),
        ..Default::default()
    }
}

fn sample_record(time: &str) -> TelemetryRecord {
    codec::decode(FRAME_80, FRAME_7D, time).unwrap()
}

fn readmems_log(pairs: usize) -> String {
    let mut text = String::from("ECUID: 3a 00 a1 14\n");
    for _ in 0..pairs {
        text.push_str(&console_line(FRAME_80));
        text.push_str("\r\n");
        text.push_str(&console_line(FRAME_7D));
        text.push_str("\r\n");
    }
    text
}

/// Canonical CSV without the trailing raw frame columns
fn strip_raw_columns(line: &str) -> String {
    let cells: Vec<&str> = line.split(',').collect();
    cells[..cells.len() - 2].join(",")
}

/// mems-rosco v1 log for the given records
fn rosco_v1_log(records: &[TelemetryRecord]) -> String {
    let fields: Vec<Field> = Field::all().filter(|f| f.rosco_column().is_some()).collect();
    let mut text = String::from("Ecu Id: 39 9a 00 00\n#time");
    for field in &fields {
        text.push(',');
        text.push_str(field.rosco_column().unwrap());
    }
    text.push('\n');
    for record in records {
        text.push_str(&record.time);
        for field in &fields {
            let value = record.get(*field);
            text.push(',');
            if field.kind() == memscene_core::record::ValueKind::Bool {
                text.push_str(if value.as_bool() { "1" } else { "0" });
            } else {
                text.push_str(&value.to_string());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_readmems_conversion() {
    init_tracing();
    let text = readmems_log(3);
    assert_eq!(SourceFormat::detect(&text), SourceFormat::ReadMems);

    let conversion = convert(SourceFormat::ReadMems, &text, &config("09:15:00")).unwrap();
    assert_eq!(conversion.report.records, 3);
    assert_eq!(conversion.report.discarded_halves, 0);

    let expected: Vec<TelemetryRecord> = ["09:15:01", "09:15:02", "09:15:03"]
        .iter()
        .map(|t| sample_record(t))
        .collect();
    assert_eq!(conversion.scenario.records(), expected.as_slice());
}

#[test]
fn test_two_80_halves_make_no_record() {
    let text = format!(
        "{}\n{}\n",
        console_line(FRAME_80),
        console_line(FRAME_80)
    );
    let conversion = convert(SourceFormat::ReadMems, &text, &config("00:00:00")).unwrap();
    assert_eq!(conversion.report.records, 0);
    assert_eq!(conversion.report.discarded_halves, 2);
    assert!(conversion.report.skipped.is_empty());
    assert!(conversion.scenario.is_empty());
}

#[test]
fn test_canonical_csv_round_trip() {
    let original = convert(SourceFormat::ReadMems, &readmems_log(2), &config("10:00:00")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.csv");
    export::save(&path, &original.scenario, OutputFormat::Csv).unwrap();

    assert_eq!(SourceFormat::detect_file(&path).unwrap(), SourceFormat::MemsFcr);
    let reread = convert_file(&path, &ConvertConfig::default()).unwrap();
    assert_eq!(reread.report.format, SourceFormat::MemsFcr);
    assert_eq!(reread.scenario.records(), original.scenario.records());
}

#[test]
fn test_reprocessing_rebuilds_raw_frames() {
    let original = sample_record("10:00:00");
    let stripped = TelemetryRecord {
        frame80: String::new(),
        frame7d: String::new(),
        ..original.clone()
    };

    let mut out = Vec::new();
    export::write_csv(&mut out, [&stripped]).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().nth(1).unwrap().ends_with(",,"));

    let conversion = convert(SourceFormat::detect(&text), &text, &ConvertConfig::default()).unwrap();
    assert_eq!(conversion.report.format, SourceFormat::MemsFcr);
    assert_eq!(conversion.scenario.records(), &[original]);
}

#[test]
fn test_reprocessing_requires_every_derived_column() {
    let original = sample_record("10:00:00");
    let stripped = TelemetryRecord {
        frame80: String::new(),
        frame7d: String::new(),
        ..original.clone()
    };
    let without_intake = |line: String| {
        let mut cells: Vec<&str> = line.split(',').collect();
        cells.remove(1 + Field::IntakeAirTemp as usize);
        cells.join(",")
    };
    let text = format!(
        "{}\n{}\n{}\n",
        without_intake(csv_header()),
        without_intake(csv_row(&stripped)),
        without_intake(csv_row(&original))
    );

    let conversion = convert(SourceFormat::MemsFcr, &text, &ConvertConfig::default()).unwrap();
    assert_eq!(conversion.scenario.records(), &[original]);
    assert_eq!(conversion.report.skipped.len(), 1);
    assert_eq!(conversion.report.skipped[0].line, 2);
    assert_eq!(
        conversion.report.skipped[0].error,
        RecordError::MissingColumn {
            column: "80x05_intake_air_temp".into()
        }
    );
}

#[test]
fn test_fractional_int_rejected() {
    let original = sample_record("11:00:00");
    let header = strip_raw_columns(&csv_header());
    let row = strip_raw_columns(&csv_row(&original));
    let mut cells: Vec<String> = row.split(',').map(String::from).collect();
    cells[1 + Field::IacPosition as usize] = "50.5".into();
    let text = format!("{header}\n{}\n", cells.join(","));

    let conversion = convert(SourceFormat::MemsRoscoV2, &text, &ConvertConfig::default()).unwrap();
    assert!(conversion.scenario.is_empty());
    assert_eq!(
        conversion.report.skipped[0].error,
        RecordError::InvalidValue {
            column: "80x12_iac_position".into(),
            value: "50.5".into()
        }
    );
}

#[test]
fn test_rosco_v2_conversion() {
    let original = sample_record("11:00:00");
    let text = format!(
        "{}\n{}\n",
        strip_raw_columns(&csv_header()),
        strip_raw_columns(&csv_row(&original))
    );
    assert_eq!(SourceFormat::detect(&text), SourceFormat::MemsRoscoV2);

    let conversion = convert(SourceFormat::MemsRoscoV2, &text, &ConvertConfig::default()).unwrap();
    assert_eq!(conversion.scenario.records(), &[original]);
}

#[test]
fn test_rosco_v1_conversion() {
    let records = vec![sample_record("11:00:00"), sample_record("11:00:01")];
    let text = rosco_v1_log(&records);
    assert_eq!(SourceFormat::detect(&text), SourceFormat::MemsRosco);

    let conversion = convert(SourceFormat::MemsRosco, &text, &ConvertConfig::default()).unwrap();
    assert!(conversion.report.skipped.is_empty());
    assert_eq!(conversion.scenario.records(), records.as_slice());
}

#[test]
fn test_rosco_bad_rows_reported_by_line() {
    let mut bad = sample_record("11:00:01");
    bad.battery_voltage = 30.0;
    let mut text = rosco_v1_log(&[sample_record("11:00:00"), bad]);
    text.push_str("11:00:02,not-a-number\n");

    let conversion = convert(SourceFormat::MemsRosco, &text, &ConvertConfig::default()).unwrap();
    assert_eq!(conversion.report.records, 1);

    let lines: Vec<_> = conversion.report.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![4, 5]);
    assert!(matches!(
        conversion.report.skipped[0].error,
        RecordError::Encode(_)
    ));
    assert!(matches!(
        conversion.report.skipped[1].error,
        RecordError::ColumnCount { .. }
    ));
}

#[test]
fn test_raw_idle_offset_option() {
    let mut config = config("00:00:00");
    config.codec.idle_speed_offset = IdleSpeedOffsetScaling::Raw;

    let conversion = convert(SourceFormat::ReadMems, &readmems_log(1), &config).unwrap();
    assert_eq!(conversion.scenario.records()[0].idle_speed_offset, 0x84);
}

#[test]
fn test_memsdiag_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diag.csv");
    std::fs::write(&path, "Time,RPM,IdleError,IdlePos(Steps),Coolant\n1,2,3,4,5\n").unwrap();

    assert!(matches!(
        convert_file(&path, &ConvertConfig::default()),
        Err(IngestError::Unsupported(SourceFormat::MemsDiag))
    ));
}

#[test]
fn test_converted_scenario_is_frozen_and_replays() {
    let conversion = convert(SourceFormat::ReadMems, &readmems_log(2), &config("10:00:00")).unwrap();
    let mut scenario: Scenario = conversion.scenario;

    assert_eq!(
        scenario.append(TelemetryRecord::default()),
        Err(ScenarioError::Frozen)
    );

    let times: Vec<String> = (0..5).map(|_| scenario.next().unwrap().time.clone()).collect();
    assert_eq!(
        times,
        vec!["10:00:01", "10:00:02", "10:00:01", "10:00:02", "10:00:01"]
    );
}

#[test]
fn test_json_export() {
    let original = convert(SourceFormat::ReadMems, &readmems_log(2), &config("10:00:00")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");
    export::save(&path, &original.scenario, OutputFormat::Json).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<TelemetryRecord> = serde_json::from_str(&content).unwrap();
    assert_eq!(records.as_slice(), original.scenario.records());
}

#[test]
fn test_config_file_drives_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memscene.json");
    std::fs::write(
        &path,
        r#"{"start_time": "23:59:59", "codec": {"idle_speed_offset": "raw"}}"#,
    )
    .unwrap();

    let config = ConvertConfig::from_file(&path).unwrap();
    let conversion = convert(SourceFormat::ReadMems, &readmems_log(2), &config).unwrap();
    let records = conversion.scenario.records();
    // first record is one second past the start, so it wraps
    assert_eq!(records[0].time, "00:00:00");
    assert_eq!(records[1].time, "00:00:01");
    assert_eq!(records[0].idle_speed_offset, 0x84);
}
