//! Opening worker inputs.

use std::fs::File;
use std::path::Path;

use crate::error::{ReadError, Result};

/// Open `path` for reading. The csv reader does its own buffering.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })
}
