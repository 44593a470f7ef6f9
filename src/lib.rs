#![forbid(unsafe_code)]

//! semver: track and bump a semantic version stored in a VERSION file
//!
//! The [`Version`] type parses, renders and mutates Semantic Versioning 2.0.0
//! strings. [`Store`] persists a version to a single-line file with atomic
//! replacement, and the [`cli`] module wires both to the `semver` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod store;
pub mod vcs;
pub mod version;

// Re-export error types for convenient access
pub use error::{
    ConfigError, FormatError, OverflowError, ParseError, SemverError, ValidationError, VcsError,
};

// Re-export core domain types for convenient access
pub use output::OutputFormat;
pub use store::Store;
pub use version::{Advance, Component, Version};
