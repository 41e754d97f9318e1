//! Fixture helpers shared by the integration tests.
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const LOG_HEADER: &str = "IP Address,Requests,Response Time";

pub fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("Failed to write fixture");
    path
}

/// Write a `id,value,label` file whose value column holds `values`.
pub fn write_values(dir: &tempfile::TempDir, name: &str, values: &[f64]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("Failed to create test file");
    writeln!(file, "id,value,label").expect("Failed to write header");
    for (i, v) in values.iter().enumerate() {
        writeln!(file, "{},{},row{}", i, v, i).expect("Failed to write row");
    }
    path
}
