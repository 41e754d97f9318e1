#![forbid(unsafe_code)]
//! colstat: sum or average one CSV column across many files concurrently.
//!
//! Facade over the workspace crates:
//! - `colstat_core`: operations, configuration, error kinds
//! - `colstat_io`: bounded file inputs and the CSV column extractor
//! - `colstat_exec`: per-file workers and the aggregating `Engine`

pub use colstat_core;
pub use colstat_exec;
pub use colstat_io;

pub use colstat_core::{ErrorKind, Operation, RunConfig, RunSummary};
pub use colstat_exec::{run, Engine, ExecError};
pub use colstat_io::{extract_column, ColumnExtractor, ReadError};
