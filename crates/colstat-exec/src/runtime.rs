//! Runtime: validate a request, fan out one worker per file, fan the results
//! back in and apply the reducer.
//!
//! Failure policy:
//! - Inputs are validated once, before any file is opened.
//! - The first error report received ends the run. Remaining workers are
//!   cancelled cooperatively and their reports are never read.
//! - The reducer runs only after every file has reported success, so a run
//!   with any failing file always fails.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use colstat_core::format::format_value;
use colstat_core::{ErrorKind, Operation, RunConfig, RunSummary};
use colstat_io::{ColumnExtractor, ReadError};

use crate::metrics::{emit_span, summary_metrics};
use crate::scheduler::FileScheduler;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("no input files")]
    NoFiles,
    #[error("invalid column: {0}")]
    InvalidColumn(i64),
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
    #[error("cannot write result: {0}")]
    Output(#[source] io::Error),
    #[error(transparent)]
    Config(#[from] colstat_core::Error),
    #[error("worker failed: {0}")]
    Worker(String),
}

impl ExecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExecError::NoFiles => ErrorKind::NoFiles,
            ExecError::InvalidColumn(_) => ErrorKind::InvalidColumn,
            ExecError::InvalidOperation(_) => ErrorKind::InvalidOperation,
            ExecError::File { source, .. } => source.kind(),
            ExecError::Output(_) => ErrorKind::Output,
            ExecError::Config(e) => e.kind(),
            ExecError::Worker(_) => ErrorKind::Runtime,
        }
    }
}

/// Engine owns the run configuration; each `run` call is independent.
#[derive(Debug, Clone)]
pub struct Engine {
    cfg: RunConfig,
}

impl Engine {
    pub fn new(cfg: RunConfig) -> Result<Self, ExecError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Compute `operation` over column `column` (1-based) of every file and
    /// write the result as one line to `out`.
    ///
    /// Nothing is written to `out` when an error is returned.
    pub async fn run<P, W>(
        &self,
        filenames: &[P],
        operation: &str,
        column: i64,
        out: &mut W,
    ) -> Result<RunSummary, ExecError>
    where
        P: AsRef<Path>,
        W: Write,
    {
        if filenames.is_empty() {
            return Err(ExecError::NoFiles);
        }
        let col = usize::try_from(column)
            .ok()
            .filter(|c| *c >= 1)
            .ok_or(ExecError::InvalidColumn(column))?;
        let op: Operation = operation
            .parse()
            .map_err(|_| ExecError::InvalidOperation(operation.to_string()))?;

        let paths: Vec<PathBuf> = filenames.iter().map(|p| p.as_ref().to_path_buf()).collect();
        let summary = RunSummary::new(op, col, now_millis());

        tracing::info!(
            files = paths.len(),
            operation = %op,
            column = col,
            max_parallel = ?self.cfg.max_parallel_files,
            "starting run"
        );

        let scheduler = FileScheduler::new(
            ColumnExtractor::from_config(col, &self.cfg),
            self.cfg.max_parallel_files,
        );
        let mut reports = scheduler.spawn_all(&paths);

        // Only this task grows the consolidated data.
        let mut consolidate: Vec<f64> = Vec::new();
        let mut pending = paths.len();

        while pending > 0 {
            let report = reports.recv().await.ok_or_else(|| {
                ExecError::Worker("workers exited without reporting".to_string())
            })?;
            match report.outcome {
                Ok(data) => {
                    consolidate.extend(data);
                    pending -= 1;
                }
                Err(e) => {
                    scheduler.cancel();
                    tracing::warn!(
                        path = %report.path.display(),
                        error = %e,
                        outstanding = pending - 1,
                        "worker failed, abandoning run"
                    );
                    return Err(e);
                }
            }
        }

        let value = op.reduce(&consolidate);
        writeln!(out, "{}", format_value(value)).map_err(ExecError::Output)?;

        let summary = summary.finish(paths.len(), consolidate.len(), value, now_millis());
        emit_span("run_finished", &summary_metrics(&summary));
        tracing::info!(
            rows = summary.rows,
            duration_ms = summary.duration_ms(),
            "run finished"
        );

        Ok(summary)
    }
}

/// Run with the default configuration.
pub async fn run<P, W>(
    filenames: &[P],
    operation: &str,
    column: i64,
    out: &mut W,
) -> Result<RunSummary, ExecError>
where
    P: AsRef<Path>,
    W: Write,
{
    Engine::new(RunConfig::default())?
        .run(filenames, operation, column, out)
        .await
}

// --- helpers ---

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
