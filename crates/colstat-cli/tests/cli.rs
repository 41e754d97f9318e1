//! End-to-end tests of the `colstat` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const LOG_HEADER: &str = "IP Address,Requests,Response Time";

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write fixture");
    path
}

fn colstat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_colstat"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("COLSTAT_MAX_PARALLEL")
        .env_remove("COLSTAT_DELIMITER")
        .output()
        .expect("run colstat")
}

#[test]
fn avg_over_two_files() {
    let dir = tempfile::tempdir().unwrap();
    let body = format!("{LOG_HEADER}\n192.168.0.199,2056,236\n");
    let a = write_csv(&dir, "a.csv", &body);
    let b = write_csv(&dir, "b.csv", &body);

    let out = colstat(&[
        "-op",
        "avg",
        "-col",
        "3",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "236\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn sum_is_the_default_operation() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(&dir, "a.csv", "id,value\n1,100\n2,200\n");

    let out = colstat(&["-col", "2", a.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "300\n");
}

#[test]
fn missing_column_exits_non_zero_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(&dir, "a.csv", &format!("{LOG_HEADER}\n192.168.0.199,2056,236\n"));

    let out = colstat(&["-col", "4", a.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid column: file has only 3 columns"));
}

#[test]
fn no_files_is_an_error() {
    let out = colstat(&["-op", "sum"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no input files"));
}

#[test]
fn unknown_operation_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_csv(&dir, "a.csv", "v\n1\n");

    let out = colstat(&["-op", "median", a.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid operation: median"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");

    let out = colstat(&[missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot open file"));
}

#[test]
fn parallelism_cap_does_not_change_result() {
    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<String> = (1..=6)
        .map(|i| {
            write_csv(&dir, &format!("f{i}.csv"), &format!("n\n{i}\n"))
                .to_string_lossy()
                .into_owned()
        })
        .collect();

    let mut args = vec!["--max-parallel", "2"];
    args.extend(paths.iter().map(String::as_str));
    let out = colstat(&args);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "21\n");
}
