//! Bump command implementation
//!
//! This module implements the `semver bump` command, which:
//! - Reads the current version from the version file
//! - Increments the major, minor or patch component, clearing lower components
//!   and any pre-release or build metadata
//! - Writes the result back, or only reports it with `--dry`

use crate::cli::args::GlobalOptions;
use crate::cli::common::{self, Change, Context};
use crate::error::SemverError;
use crate::version::Component;
use termcolor::WriteColor;

/// Run the bump command
///
/// # Returns
///
/// Exit code:
/// - 0: Success, or no version file
/// - 1: I/O or configuration error, or an unreadable version file
/// - 2: Component overflow
pub fn run_bump(options: &GlobalOptions, component: Component, dry_run: bool) -> i32 {
    common::run(options, |ctx, out| {
        run_bump_inner(ctx, component, dry_run, out).map(|_| ())
    })
}

/// Internal implementation of bump command
pub fn run_bump_inner(
    ctx: &Context,
    component: Component,
    dry_run: bool,
    out: &mut impl WriteColor,
) -> Result<Change, SemverError> {
    let current = ctx.store.load()?;
    writeln!(out, "Current Version: {current}")?;
    writeln!(out, "Bumping {}", component.title())?;

    let mut new = current.clone();
    new.bump(component)?;
    tracing::debug!(%component, from = %current, to = %new, dry_run, "bump");

    common::commit(ctx, out, current, new, dry_run)
}
