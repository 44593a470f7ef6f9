//! Build script that records git metadata for `semver about`.
//!
//! Each value may be supplied through an environment variable of the same
//! name, which wins over what git reports. Values that cannot be determined
//! are left unset.

use std::path::Path;
use std::process::Command;

const COMMIT: &str = "SEMVER_BUILD_COMMIT";
const BRANCH: &str = "SEMVER_BUILD_BRANCH";
const TIME: &str = "SEMVER_BUILD_TIME";
const DIRTY: &str = "SEMVER_BUILD_DIRTY";

fn main() {
    if Path::new(".git/HEAD").exists() {
        println!("cargo::rerun-if-changed=.git/HEAD");
    }
    if Path::new(".git/index").exists() {
        println!("cargo::rerun-if-changed=.git/index");
    }

    emit(COMMIT, || git(&["rev-parse", "--short", "HEAD"]));
    emit(BRANCH, || git(&["rev-parse", "--abbrev-ref", "HEAD"]));
    emit(TIME, || git(&["log", "-1", "--format=%cI"]));
    emit(DIRTY, || {
        git(&["status", "--porcelain", "--untracked-files=no"])
            .map(|status| (!status.is_empty()).to_string())
    });
}

fn emit(name: &str, from_git: impl FnOnce() -> Option<String>) {
    println!("cargo::rerun-if-env-changed={name}");
    let value = std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(from_git)
        .filter(|value| !value.is_empty());
    if let Some(value) = value {
        println!("cargo::rustc-env={name}={value}");
    }
}

/// Trimmed stdout of a successful git command
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
