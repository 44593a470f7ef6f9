//! Set command implementation
//!
//! `semver set <version>` replaces the whole version, `semver set pre`
//! changes the pre-release and `semver set build` changes the build metadata.
//! All three accept `--dry`.

use crate::cli::args::{GlobalOptions, SetArgs, SetTarget};
use crate::cli::common::{self, Change, Context};
use crate::error::{SemverError, ValidationError};
use crate::vcs::{GitRepository, RevisionSource};
use crate::version::Advance;
use std::cmp::Ordering;
use termcolor::WriteColor;

/// Where new build metadata comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildSource<'a> {
    /// Literal value
    Value(&'a str),
    /// Short hash of the current git revision
    Git,
    /// Remove build metadata
    Clear,
}

impl<'a> BuildSource<'a> {
    /// Picks the source from the `--value`, `--git` and `--clear` flags
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` unless exactly one flag is given.
    pub fn from_flags(value: Option<&'a str>, git: bool, clear: bool) -> Result<Self, ValidationError> {
        match (value, git, clear) {
            (Some(value), false, false) => Ok(BuildSource::Value(value)),
            (None, true, false) => Ok(BuildSource::Git),
            (None, false, true) => Ok(BuildSource::Clear),
            (None, false, false) => Err(ValidationError::MissingFlag {
                flags: vec!["--value", "--git", "--clear"],
            }),
            (value, git, clear) => {
                let mut flags = Vec::new();
                if value.is_some() {
                    flags.push("--value");
                }
                if git {
                    flags.push("--git");
                }
                if clear {
                    flags.push("--clear");
                }
                Err(ValidationError::ConflictingFlags { flags })
            }
        }
    }
}

/// Run the set command and its `pre`/`build` subcommands
///
/// # Returns
///
/// Exit code:
/// - 0: Success, nothing to do, or no version file
/// - 1: I/O, configuration or git error
/// - 2: Invalid version, pre-release, build metadata or flag combination
pub fn run_set(options: &GlobalOptions, args: &SetArgs) -> i32 {
    common::run(options, |ctx, out| {
        match (&args.target, args.version.as_deref()) {
            (Some(SetTarget::Pre { value, clear }), _) => {
                run_set_pre_inner(ctx, value.as_deref(), *clear, args.dry, out).map(|_| ())
            }
            (Some(SetTarget::Build { value, git, clear }), _) => {
                let source = BuildSource::from_flags(value.as_deref(), *git, *clear)?;
                let repo = GitRepository::open(&ctx.dir);
                run_set_build_inner(ctx, source, &repo, args.dry, out).map(|_| ())
            }
            (None, Some(version)) => run_set_version_inner(ctx, version, args.dry, out).map(|_| ()),
            // clap requires a version whenever no subcommand is given
            (None, None) => Err(ValidationError::MissingFlag {
                flags: vec!["<VERSION>", "pre", "build"],
            }
            .into()),
        }
    })
}

/// Internal implementation of `semver set <version>`
pub fn run_set_version_inner(
    ctx: &Context,
    new_version: &str,
    dry_run: bool,
    out: &mut impl WriteColor,
) -> Result<Change, SemverError> {
    let current = ctx.store.load()?;
    writeln!(out, "Current Version: {current}")?;
    writeln!(out, "Setting Version")?;

    let mut new = current.clone();
    new.set_full(new_version)?;
    if new.precedence(&current) == Ordering::Less {
        tracing::warn!("new version {new} has lower precedence than {current}");
    }

    common::commit(ctx, out, current, new, dry_run)
}

/// Internal implementation of `semver set pre`
///
/// With neither `value` nor `clear` the pre-release auto-advances. Returns
/// `None` when the current pre-release has no successor.
pub fn run_set_pre_inner(
    ctx: &Context,
    value: Option<&str>,
    clear: bool,
    dry_run: bool,
    out: &mut impl WriteColor,
) -> Result<Option<Change>, SemverError> {
    if value.is_some() && clear {
        return Err(ValidationError::ConflictingFlags {
            flags: vec!["--value", "--clear"],
        }
        .into());
    }

    let current = ctx.store.load()?;
    writeln!(out, "Current Version: {current}")?;
    writeln!(out, "Setting Prerelease")?;

    let mut new = current.clone();
    match value {
        Some(value) => new.set_prerelease(value)?,
        None if clear => new.set_prerelease("")?,
        None => {
            if let Advance::NothingToDo(pre) = new.advance_prerelease() {
                writeln!(
                    out,
                    "Current Pre-Release value is {pre}. No value specified. Nothing to do."
                )?;
                return Ok(None);
            }
        }
    }

    common::commit(ctx, out, current, new, dry_run).map(Some)
}

/// Internal implementation of `semver set build`
pub fn run_set_build_inner(
    ctx: &Context,
    source: BuildSource<'_>,
    revisions: &dyn RevisionSource,
    dry_run: bool,
    out: &mut impl WriteColor,
) -> Result<Change, SemverError> {
    let current = ctx.store.load()?;
    writeln!(out, "Current Version: {current}")?;
    writeln!(out, "Setting Build Metadata")?;

    let build = match source {
        BuildSource::Value(value) => value.to_string(),
        BuildSource::Git => revisions.short_revision()?,
        BuildSource::Clear => String::new(),
    };

    let mut new = current.clone();
    new.set_build(&build)?;

    common::commit(ctx, out, current, new, dry_run)
}
