//! Per-file worker fan-out.
//!
//! Every input file gets its own worker, all spawned up front. A worker waits
//! for a permit when a parallelism cap is configured, runs the blocking CSV
//! parse on tokio's blocking pool and sends exactly one `WorkerReport` back.
//! Workers never touch the consolidated data; the receiver owns it.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};

use colstat_io::{open_input, ColumnExtractor, ReadError};

use crate::runtime::ExecError;

/// Outcome of one worker, tagged with the file it processed.
#[derive(Debug)]
pub struct WorkerReport {
    pub path: PathBuf,
    pub outcome: Result<Vec<f64>, ExecError>,
}

pub struct FileScheduler {
    extractor: ColumnExtractor,
    /// `None` lets every worker parse at once.
    semaphore: Option<Arc<Semaphore>>,
    cancel: Arc<AtomicBool>,
}

impl FileScheduler {
    pub fn new(extractor: ColumnExtractor, max_parallel: Option<usize>) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        Self {
            extractor: extractor.with_cancel(Arc::clone(&cancel)),
            semaphore: max_parallel.map(|n| Arc::new(Semaphore::new(n.max(1)))),
            cancel,
        }
    }

    /// Ask in-flight workers to stop. Their reports are still sent, as
    /// `Cancelled` errors, but nobody is expected to read them.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Spawn one worker per path and return the channel their reports arrive on.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_all(&self, paths: &[PathBuf]) -> mpsc::UnboundedReceiver<WorkerReport> {
        let (report_tx, report_rx) = mpsc::unbounded_channel::<WorkerReport>();

        for path in paths {
            let path = path.clone();
            let extractor = self.extractor.clone();
            let semaphore = self.semaphore.clone();
            let cancel = Arc::clone(&self.cancel);
            let report_tx = report_tx.clone();

            tokio::spawn(async move {
                let outcome = Self::run_worker(path.clone(), extractor, semaphore, cancel).await;
                // The receiver is gone once the run has already failed.
                report_tx.send(WorkerReport { path, outcome }).ok();
            });
        }

        report_rx
    }

    async fn run_worker(
        path: PathBuf,
        extractor: ColumnExtractor,
        semaphore: Option<Arc<Semaphore>>,
        cancel: Arc<AtomicBool>,
    ) -> Result<Vec<f64>, ExecError> {
        // Hold permit for duration of the parse.
        let _permit = match semaphore {
            Some(sem) => Some(
                sem.acquire_owned()
                    .await
                    .map_err(|e| ExecError::Worker(format!("semaphore: {e}")))?,
            ),
            None => None,
        };

        if cancel.load(Ordering::Relaxed) {
            return Err(ExecError::File {
                path,
                source: ReadError::Cancelled,
            });
        }

        tracing::debug!(path = %path.display(), "worker started");

        let task_path = path.clone();
        let joined = tokio::task::spawn_blocking(move || {
            crate::fail_point!("worker_before_open");
            // The file handle is dropped, and so closed, before this returns.
            let input = open_input(&task_path)?;
            extractor.extract(input)
        })
        .await;

        match joined {
            Ok(Ok(data)) => {
                tracing::debug!(path = %path.display(), rows = data.len(), "worker finished");
                Ok(data)
            }
            Ok(Err(source)) => {
                tracing::debug!(path = %path.display(), error = %source, "worker failed");
                Err(ExecError::File { path, source })
            }
            Err(e) => Err(ExecError::Worker(format!("{}: {e}", path.display()))),
        }
    }
}
