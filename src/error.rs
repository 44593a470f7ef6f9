//! Error types for semver
//!
//! This module defines the error types used throughout the crate, following
//! a hierarchical structure: each concern has its own enum and everything
//! converts into [`SemverError`] at the command boundary.

use crate::version::Component;
use std::path::PathBuf;

/// A string that does not follow the semantic versioning grammar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input is not `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
    #[error("'{input}' is not a valid semantic version (expected MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD])")]
    Invalid { input: String },

    /// A numeric component does not fit in 64 bits
    #[error("{component} version '{value}' is too large")]
    Overflow { component: Component, value: String },

    /// Prerelease is not a dot-separated list of valid identifiers
    #[error(
        "'{value}' is not a valid pre-release (dot-separated [0-9A-Za-z-] identifiers, no leading zeros in numbers)"
    )]
    InvalidPrerelease { value: String },

    /// Build metadata is not a dot-separated list of valid identifiers
    #[error("'{value}' is not valid build metadata (dot-separated [0-9A-Za-z-] identifiers)")]
    InvalidBuild { value: String },
}

/// Bumping a component past its maximum value
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot bump {component} version past {}", u64::MAX)]
pub struct OverflowError {
    pub component: Component,
}

/// Mutually exclusive command flags used incorrectly
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// More than one of a set of exclusive flags was given
    #[error("only one of {} may be given", .flags.join(", "))]
    ConflictingFlags { flags: Vec<&'static str> },

    /// None of a set of required flags was given
    #[error("exactly one of {} must be given", .flags.join(", "))]
    MissingFlag { flags: Vec<&'static str> },
}

/// An output format name that is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("'{given}' is an unknown format. Options are [{}]", .allowed.join(" | "))]
    Unknown {
        given: String,
        allowed: &'static [&'static str],
    },
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error while reading the config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or schema error
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Semantically invalid configuration value
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Source-control query failures
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    /// The command could not be spawned (e.g. git not installed)
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited unsuccessfully
    #[error("`{command}` failed with code {code}:\n{stderr}")]
    Failed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The command succeeded but printed nothing usable
    #[error("`{command}` returned no output")]
    EmptyOutput { command: String },
}

/// Top-level error type for semver
#[derive(Debug, thiserror::Error)]
pub enum SemverError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source control error: {0}")]
    Vcs(#[from] VcsError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The version file exists but does not hold a valid version
    #[error("{} does not contain a valid version: {source}", .path.display())]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// No version file in the working directory
    #[error("No VERSION file found in {}.", .dir.display())]
    NotInitialized { dir: PathBuf },

    /// `init` outside of a git checkout
    #[error(
        "The directory {} is not a git project.\nEither change directories to a git project or first run:\n$ git init",
        .dir.display()
    )]
    NotACheckout { dir: PathBuf },

    /// Input ended while a prompt was waiting for an answer
    #[error("input closed before an answer was given")]
    PromptClosed,
}

impl SemverError {
    /// Whether the error was caused by bad user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            SemverError::Parse(_)
                | SemverError::Validation(_)
                | SemverError::Format(_)
                | SemverError::Overflow(_)
        )
    }
}
