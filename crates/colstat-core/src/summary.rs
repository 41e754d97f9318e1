//! Summary of a completed run, for logs and audit.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stats::Operation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Version string for provenance.
    pub engine_version: String,

    pub operation: Operation,

    /// 1-based column the statistic was computed over.
    pub column: usize,

    /// Number of input files that contributed.
    pub files: usize,

    /// Data rows across all files (headers excluded).
    pub rows: usize,

    /// Computed statistic, `None` when it is not finite (the average of no
    /// rows is NaN). JSON has no spelling for those values.
    pub value: Option<f64>,

    /// Milliseconds since Unix epoch (UTC).
    pub started_ms: u64,
    pub finished_ms: u64,
}

impl RunSummary {
    pub fn new(operation: Operation, column: usize, started_ms: u64) -> Self {
        Self {
            engine_version: crate::VERSION.to_string(),
            operation,
            column,
            files: 0,
            rows: 0,
            value: None,
            started_ms,
            finished_ms: started_ms,
        }
    }

    pub fn finish(mut self, files: usize, rows: usize, value: f64, finished_ms: u64) -> Self {
        self.files = files;
        self.rows = rows;
        self.value = value.is_finite().then_some(value);
        self.finished_ms = finished_ms;
        self
    }

    pub fn duration_ms(&self) -> u64 {
        self.finished_ms.saturating_sub(self.started_ms)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
