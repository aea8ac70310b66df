//! Canonical CSV logs
//!
//! Rows normally carry both raw frames, which are decoded as-is. Rows with an
//! empty raw column are reprocessed: the frames are rebuilt from the derived
//! columns first.

use super::pairing::FramePair;
use super::rosco::rebuild_pair;
use super::table::{Column, CsvTable};
use super::{Batch, SkippedRecord};
use crate::codec::FrameCodec;

/// Collect frame pairs from a parsed canonical log
pub(crate) fn frame_pairs(table: &CsvTable<'_>, codec: &FrameCodec) -> Batch {
    let mut batch = Batch::default();
    let mut rebuilt = 0usize;

    for row in table.rows() {
        let raw = table
            .cell(row, Column::Raw80)
            .zip(table.cell(row, Column::Raw7d));

        let pair = match raw {
            Some((hex80, hex7d)) => Ok(FramePair {
                line: row.line,
                timestamp: table.cell(row, Column::Time).unwrap_or_default().to_string(),
                hex80: hex80.to_string(),
                hex7d: hex7d.to_string(),
            }),
            None => {
                rebuilt += 1;
                rebuild_pair(table, row, codec)
            }
        };

        match pair {
            Ok(pair) => batch.pairs.push(pair),
            Err(error) => batch.skipped.push(SkippedRecord {
                line: row.line,
                error,
            }),
        }
    }

    if rebuilt > 0 {
        tracing::debug!(rows = rebuilt, "rebuilt raw frames from derived columns");
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{csv_header, csv_row};
    use crate::ingest::RecordError;
    use crate::record::TelemetryRecord;

    #[test]
    fn test_raw_columns_used_verbatim() {
        let text = "#time,80x01-02_engine-rpm,0x7d_raw,0x80_raw\n\
                    09:00:00,1234,7D20AA,801CBB\n";
        let table = CsvTable::parse(text).unwrap();
        let batch = frame_pairs(&table, &FrameCodec::default());

        assert_eq!(
            batch.pairs,
            vec![FramePair {
                line: 2,
                timestamp: "09:00:00".into(),
                hex80: "801CBB".into(),
                hex7d: "7D20AA".into(),
            }]
        );
    }

    #[test]
    fn test_missing_raw_rebuilt() {
        let record = TelemetryRecord {
            time: "09:00:00".into(),
            engine_rpm: 1234,
            coolant_temp: 80,
            ..Default::default()
        };
        let text = format!("{}\n{}\n", csv_header(), csv_row(&record));
        assert!(text.ends_with(",,\n"));
        let table = CsvTable::parse(&text).unwrap();
        let batch = frame_pairs(&table, &FrameCodec::default());

        assert!(batch.skipped.is_empty());
        assert_eq!(batch.pairs.len(), 1);
        assert!(batch.pairs[0].hex80.starts_with("801C04D287"));
        assert!(batch.pairs[0].hex7d.starts_with("7D20"));
    }

    #[test]
    fn test_rebuild_needs_every_derived_column() {
        let text = "#time,80x01-02_engine-rpm,0x7d_raw,0x80_raw\n\
                    09:00:00,1234,,\n";
        let table = CsvTable::parse(text).unwrap();
        let batch = frame_pairs(&table, &FrameCodec::default());

        assert!(batch.pairs.is_empty());
        assert_eq!(
            batch.skipped,
            vec![SkippedRecord {
                line: 2,
                error: RecordError::MissingColumn {
                    column: "80x03_coolant_temp".into()
                },
            }]
        );
    }
}
