#![forbid(unsafe_code)]

//! Output views of a version
//!
//! Three renderings are supported: the canonical string, an indented JSON
//! object, and a single-line "pretty" brace notation that mirrors the field
//! names of the JSON form but is not itself valid JSON.

use crate::error::FormatError;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names accepted on the command line, in display order
pub const FORMAT_NAMES: &[&str] = &["string", "json", "pretty"];

/// Output format for printing a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    /// Canonical `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
    #[default]
    Plain,
    /// Indented JSON object
    Json,
    /// Single-line brace notation
    Pretty,
}

impl OutputFormat {
    /// Canonical command-line name
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "string",
            OutputFormat::Json => "json",
            OutputFormat::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" | "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(FormatError::Unknown {
                given: s.to_string(),
                allowed: FORMAT_NAMES,
            }),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Renders `version` in the requested format
pub fn format(version: &Version, kind: OutputFormat) -> String {
    match kind {
        OutputFormat::Plain => version.to_string(),
        OutputFormat::Json => format_json(version),
        OutputFormat::Pretty => format_pretty(version),
    }
}

fn format_json(version: &Version) -> String {
    // Serializing plain integers and strings into a String cannot fail
    serde_json::to_string_pretty(version).unwrap_or_default()
}

fn format_pretty(version: &Version) -> String {
    format!(
        "{{Major: {}, Minor: {}, Patch: {}, PreRelease: \"{}\", Build: \"{}\"}}",
        version.major(),
        version.minor(),
        version.patch(),
        version.prerelease(),
        version.build()
    )
}
