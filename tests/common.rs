//! Test utilities for semver integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Temporary project directory holding `VERSION` with `content`
pub fn project_with(content: &str) -> TempDir {
    let temp_dir = assert_ok!(TempDir::new());
    assert_ok!(fs::write(temp_dir.path().join("VERSION"), content));
    temp_dir
}

/// Temporary directory that looks like a git checkout, without a VERSION file
pub fn checkout() -> TempDir {
    let temp_dir = assert_ok!(TempDir::new());
    assert_ok!(fs::create_dir(temp_dir.path().join(".git")));
    temp_dir
}

/// Content of the VERSION file in `dir`
pub fn read_version(dir: &Path) -> String {
    assert_ok!(fs::read_to_string(dir.join("VERSION")))
}

/// The `semver` binary running in `dir` with a clean environment
pub fn semver(dir: &Path) -> Command {
    let mut cmd = assert_ok!(Command::cargo_bin("semver"));
    cmd.current_dir(dir)
        .env_remove("SEMVER_DIR")
        .env_remove("RUST_LOG");
    cmd
}
