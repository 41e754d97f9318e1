#![forbid(unsafe_code)]
//! colstat-io: file inputs and the CSV column extractor.
//!
//! Everything here is synchronous. The executor moves these calls onto a
//! blocking pool; nothing in this crate knows about the async runtime.

pub mod error;
pub mod input;
pub mod readers;

pub use error::{ReadError, Result};
pub use input::open_input;
pub use readers::csv::{extract_column, ColumnExtractor};
