#![forbid(unsafe_code)]
//! colstat-core: operations, reducers, configuration and the shared error taxonomy.
//!
//! This crate does no I/O. Readers live in `colstat-io`, the concurrent
//! orchestration in `colstat-exec`.

pub mod config;
pub mod error;
pub mod format;
pub mod stats;
pub mod summary;

pub use config::RunConfig;
pub use error::{Error, ErrorKind, Result};
pub use stats::Operation;
pub use summary::RunSummary;

/// Crate version used in run summaries.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
