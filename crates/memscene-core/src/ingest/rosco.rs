//! `mems-rosco` CSV logs
//!
//! These hold derived values only. Each row is encoded back to raw frames so
//! the regular decoder produces the record.

use super::pairing::FramePair;
use super::table::{CsvTable, Row};
use super::{Batch, RecordError, SkippedRecord};
use crate::codec::FrameCodec;

/// Rebuild the frame pair for one row from its derived columns
pub(crate) fn rebuild_pair(
    table: &CsvTable<'_>,
    row: &Row<'_>,
    codec: &FrameCodec,
) -> Result<FramePair, RecordError> {
    if let Some(field) = table.missing_field() {
        return Err(RecordError::MissingColumn {
            column: field.column().to_string(),
        });
    }
    let record = table.record(row)?;
    let (hex80, hex7d) = codec.encode(&record)?;
    Ok(FramePair {
        line: row.line,
        timestamp: record.time,
        hex80,
        hex7d,
    })
}

/// Collect frame pairs from a parsed rosco log
pub(crate) fn frame_pairs(table: &CsvTable<'_>, codec: &FrameCodec) -> Batch {
    let mut batch = Batch::default();
    for row in table.rows() {
        match rebuild_pair(table, row, codec) {
            Ok(pair) => batch.pairs.push(pair),
            Err(error) => batch.skipped.push(SkippedRecord {
                line: row.line,
                error,
            }),
        }
    }
    batch
}
