#![forbid(unsafe_code)]
//! colstat-exec: per-file workers, fan-in of their results, and the reducer step.
//!
//! `Engine::run` validates its inputs, spawns one worker per file through the
//! `FileScheduler`, merges what the workers report and writes the statistic.

pub mod failpoints;
pub mod metrics;
pub mod runtime;
pub mod scheduler;

pub use runtime::{run, Engine, ExecError};
pub use scheduler::{FileScheduler, WorkerReport};
