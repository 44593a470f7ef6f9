//! `semver about`: build information for this tool

use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use serde::Serialize;
use std::io::{self, Write};

/// Name, version, source revision and platform of the running binary
///
/// Revision fields are recorded by the build script and are absent when the
/// binary was built outside a git checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_time: Option<&'static str>,
    /// Uncommitted changes were present at build time
    #[serde(skip_serializing_if = "is_false")]
    pub dirty: bool,
    pub os: &'static str,
    pub arch: &'static str,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl AppInfo {
    pub fn current() -> Self {
        Self {
            name: "semver",
            version: env!("CARGO_PKG_VERSION"),
            branch: option_env!("SEMVER_BUILD_BRANCH"),
            commit: option_env!("SEMVER_BUILD_COMMIT"),
            build_time: option_env!("SEMVER_BUILD_TIME"),
            dirty: option_env!("SEMVER_BUILD_DIRTY") == Some("true"),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

/// Run the about command
pub fn run_about(json: bool) -> i32 {
    let mut stdout = io::stdout().lock();
    match run_about_inner(&AppInfo::current(), json, &mut stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of about command
pub fn run_about_inner(info: &AppInfo, json: bool, out: &mut impl Write) -> io::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(info).map_err(io::Error::other)?;
        writeln!(out, "{rendered}")
    } else {
        writeln!(out, "{} {}", info.name, info.version)?;
        if let Some(branch) = info.branch {
            writeln!(out, "branch: {branch}")?;
        }
        if let Some(commit) = info.commit {
            let suffix = if info.dirty { " (dirty)" } else { "" };
            writeln!(out, "commit: {commit}{suffix}")?;
        }
        if let Some(build_time) = info.build_time {
            writeln!(out, "built:  {build_time}")?;
        }
        writeln!(out, "os:   {}", info.os)?;
        writeln!(out, "arch: {}", info.arch)
    }
}
