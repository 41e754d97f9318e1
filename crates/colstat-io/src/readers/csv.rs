//! CSV column extraction.
//!
//! The first record is always a header and is skipped. Every data record must
//! carry the requested column, have the header's width, and hold an `f64` in
//! the target cell.

use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colstat_core::RunConfig;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{ReadError, Result};

/// Extracts one numeric column from CSV input.
#[derive(Debug, Clone)]
pub struct ColumnExtractor {
    /// 1-based column index.
    column: usize,
    delimiter: u8,
    cancel: Option<Arc<AtomicBool>>,
}

impl ColumnExtractor {
    pub fn new(column: usize) -> Self {
        Self {
            column,
            delimiter: b',',
            cancel: None,
        }
    }

    /// Reader options taken from a run configuration.
    pub fn from_config(column: usize, cfg: &RunConfig) -> Self {
        Self {
            delimiter: cfg.delimiter,
            ..Self::new(column)
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Stop with [`ReadError::Cancelled`] once `flag` is set. Checked between records.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Read every data record of `source` and parse the target column.
    ///
    /// The returned values are in record order, one per data record.
    pub fn extract<R: Read>(&self, source: R) -> Result<Vec<f64>> {
        let idx = self
            .column
            .checked_sub(1)
            .ok_or(ReadError::ColumnIndex(self.column))?;

        // Width is checked per record, after the column lookup.
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(source);
        let width = rdr.headers()?.len();

        let mut data = Vec::new();
        let mut record = StringRecord::new();
        loop {
            if self.is_cancelled() {
                return Err(ReadError::Cancelled);
            }
            if !rdr.read_record(&mut record)? {
                break;
            }
            let found = record.len();
            let cell = record
                .get(idx)
                .ok_or(ReadError::InvalidColumn { fields: found })?;
            if found != width {
                return Err(ReadError::FieldCount {
                    line: record.position().map_or(0, |pos| pos.line()),
                    expected: width,
                    found,
                });
            }
            let v = cell.parse::<f64>().map_err(ReadError::NotANumber)?;
            data.push(v);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(column = self.column, rows = data.len(), "extracted column");

        Ok(data)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Parse column `column` (1-based) of every data record in `source`.
pub fn extract_column<R: Read>(source: R, column: usize) -> Result<Vec<f64>> {
    ColumnExtractor::new(column).extract(source)
}
