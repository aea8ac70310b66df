//! CSV log tables
//!
//! Both `mems-rosco` and canonical logs are plain comma-separated text with a
//! `#time` header line, optionally preceded by a preamble (`Ecu Id: ...`).

use super::{IngestError, RecordError};
use crate::export::{RAW_7D_COLUMN, RAW_80_COLUMN, TIME_COLUMN};
use crate::record::{Field, TelemetryRecord};

/// Meaning of a header column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Record timestamp
    Time,
    /// A derived field
    Field(Field),
    /// Raw `0x7d` frame
    Raw7d,
    /// Raw `0x80` frame
    Raw80,
    /// Unrecognized; ignored
    Ignored,
}

impl Column {
    fn resolve(name: &str) -> Self {
        match name {
            TIME_COLUMN => Column::Time,
            RAW_7D_COLUMN => Column::Raw7d,
            RAW_80_COLUMN => Column::Raw80,
            other => Field::from_column(other).map_or(Column::Ignored, Column::Field),
        }
    }
}

/// One data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// Line number in the source (1-based)
    pub line: usize,
    /// Trimmed cells
    pub cells: Vec<&'a str>,
}

/// A parsed CSV log
#[derive(Debug, Clone)]
pub struct CsvTable<'a> {
    names: Vec<&'a str>,
    columns: Vec<Column>,
    rows: Vec<Row<'a>>,
    legacy: bool,
}

impl<'a> CsvTable<'a> {
    /// Split log text into header and rows
    pub fn parse(text: &'a str) -> Result<Self, IngestError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')));

        let header = lines
            .by_ref()
            .find(|(_, line)| line.starts_with(TIME_COLUMN))
            .map(|(_, line)| line)
            .ok_or(IngestError::MissingHeader)?;

        let names: Vec<&str> = split(header).collect();
        let columns: Vec<Column> = names.iter().map(|name| Column::resolve(name)).collect();
        let legacy = names
            .iter()
            .any(|name| Field::all().any(|f| f.rosco_column() == Some(*name)));
        for (name, column) in names.iter().zip(&columns) {
            if *column == Column::Ignored {
                tracing::debug!(column = %name, "ignoring unrecognized column");
            }
        }

        let rows = lines
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line, text)| Row {
                line,
                cells: split(text).collect(),
            })
            .collect();

        Ok(Self {
            names,
            columns,
            rows,
            legacy,
        })
    }

    /// Column meanings in header order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Data rows in file order
    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    /// Whether the header carries a column
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// First field the header has no column for
    ///
    /// mems-rosco v1 headers never logged DTC1, so it is not required there.
    pub fn missing_field(&self) -> Option<Field> {
        Field::all()
            .filter(|f| !(self.legacy && f.rosco_column().is_none()))
            .find(|f| !self.has_column(Column::Field(*f)))
    }

    /// Cell of `row` under `column`, if present and non-empty
    pub fn cell(&self, row: &Row<'a>, column: Column) -> Option<&'a str> {
        let index = self.columns.iter().position(|c| *c == column)?;
        row.cells.get(index).copied().filter(|cell| !cell.is_empty())
    }

    /// Build a record from a row's derived columns
    ///
    /// Fields without a column keep their default; see [`Self::missing_field`]
    /// before encoding. Raw frame columns are not read here.
    pub fn record(&self, row: &Row<'a>) -> Result<TelemetryRecord, RecordError> {
        if row.cells.len() != self.columns.len() {
            return Err(RecordError::ColumnCount {
                expected: self.columns.len(),
                actual: row.cells.len(),
            });
        }

        let mut record = TelemetryRecord::default();
        for ((column, name), cell) in self.columns.iter().zip(&self.names).zip(&row.cells) {
            match column {
                Column::Time => record.time = cell.to_string(),
                Column::Field(field) => {
                    let value = field.kind().parse(cell).ok_or_else(|| RecordError::InvalidValue {
                        column: name.to_string(),
                        value: cell.to_string(),
                    })?;
                    record.set(*field, value);
                }
                Column::Raw7d | Column::Raw80 | Column::Ignored => {}
            }
        }
        Ok(record)
    }
}

fn split(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(|cell| cell.trim().trim_matches('"'))
}
