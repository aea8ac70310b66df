//! `readmems` console dumps
//!
//! The console prints each response as spaced hex after its command:
//!
//! ```text
//! ECUID: 3a 00 a1 14
//! 80: 1C 0A DC 59 ...
//! 7D: 20 01 23 00 ...
//! ```
//!
//! No timestamps are recorded. The first record is stamped one second after
//! the start time and each later record one second after that.

use chrono::{Duration, NaiveTime};

use super::pairing::{FramePair, FramePairer};
use super::Batch;
use crate::frame::Command;

/// Timestamp format for generated record times
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Strip the separators from a response line
fn clean(line: &str) -> String {
    line.chars()
        .filter(|c| !matches!(c, ':' | ' ' | '\r' | '\t'))
        .collect()
}

fn command_of(cleaned: &str) -> Option<Command> {
    let code = u8::from_str_radix(cleaned.get(..2)?, 16).ok()?;
    Command::from_code(code)
}

/// Collect frame pairs from a console dump
pub(crate) fn frame_pairs(text: &str, start: NaiveTime) -> Batch {
    let mut pairer = FramePairer::new();
    let mut batch = Batch::default();

    for (index, line) in text.lines().enumerate() {
        let cleaned = clean(line);
        let Some(command) = command_of(&cleaned) else {
            continue;
        };

        if let Some((hex80, hex7d)) = pairer.push(command, cleaned) {
            let offset = Duration::seconds(batch.pairs.len() as i64 + 1);
            batch.pairs.push(FramePair {
                line: index + 1,
                timestamp: (start + offset).format(TIME_FORMAT).to_string(),
                hex80,
                hex7d,
            });
        }
    }

    batch.discarded_halves = pairer.finish();
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line() {
        assert_eq!(clean("80: 1C 0A DC\r"), "801C0ADC");
        assert_eq!(clean("7D: 20 01"), "7D2001");
    }

    #[test]
    fn test_command_of() {
        assert_eq!(command_of("801C"), Some(Command::Data80));
        assert_eq!(command_of("7d20"), Some(Command::Data7d));
        assert_eq!(command_of("ECUID3A"), None);
        assert_eq!(command_of("8"), None);
        assert_eq!(command_of("7E20"), None);
    }

    #[test]
    fn test_pairs_and_timestamps() {
        let text = "ECUID: 3a 00\n\
                    80: 1C AA\n\
                    7D: 20 BB\n\
                    80: 1C CC\n\
                    7D: 20 DD\n";
        let start = NaiveTime::from_hms_opt(23, 59, 58).unwrap();
        let batch = frame_pairs(text, start);

        assert_eq!(batch.pairs.len(), 2);
        assert_eq!(batch.pairs[0].hex80, "801CAA");
        assert_eq!(batch.pairs[0].hex7d, "7D20BB");
        assert_eq!(batch.pairs[0].line, 3);
        assert_eq!(batch.pairs[0].timestamp, "23:59:59");
        // wraps past midnight
        assert_eq!(batch.pairs[1].timestamp, "00:00:00");
        assert_eq!(batch.discarded_halves, 0);
    }

    #[test]
    fn test_unpaired_halves() {
        let text = "7D: 20 00\n80: 1C 01\n80: 1C 02\n7D: 20 03\n80: 1C 04\n";
        let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let batch = frame_pairs(text, start);

        assert_eq!(batch.pairs.len(), 1);
        assert_eq!(batch.pairs[0].hex80, "801C02");
        assert_eq!(batch.pairs[0].timestamp, "08:00:01");
        assert_eq!(batch.discarded_halves, 3);
    }
}
