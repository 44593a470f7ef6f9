//! `semver version` and the bare `semver` invocation

use crate::cli::args::GlobalOptions;
use crate::cli::common::{self, Context};
use crate::error::SemverError;
use crate::output::{self, OutputFormat};
use std::io::Write;

/// Run the version command
///
/// `format` falls back to `[output] format` from the config file.
///
/// # Returns
///
/// Exit code:
/// - 0: Success, or no version file
/// - 1: I/O or configuration error, or an unreadable version file
/// - 2: Unknown format
pub fn run_version(options: &GlobalOptions, format: Option<&str>) -> i32 {
    common::run(options, |ctx, out| run_version_inner(ctx, format, out))
}

/// Internal implementation of the version command
pub fn run_version_inner(
    ctx: &Context,
    format: Option<&str>,
    out: &mut impl Write,
) -> Result<(), SemverError> {
    // Reject the format before touching the file so nothing partial is printed
    let format = match format {
        Some(name) => name.parse::<OutputFormat>()?,
        None => ctx.config.output.format,
    };

    let version = ctx.store.load()?;
    writeln!(out, "{}", output::format(&version, format))?;
    Ok(())
}
