//! Common helper functions shared across CLI commands
//!
//! This module resolves the project directory and configuration, picks the
//! color mode, and turns command results into printed messages and exit codes.

use crate::cli::args::GlobalOptions;
use crate::config::{ColorOption, Config};
use crate::error::SemverError;
use crate::store::Store;
use crate::version::Version;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Everything a command needs to know about the project it runs in
#[derive(Debug, Clone)]
pub struct Context {
    /// Project directory
    pub dir: PathBuf,
    /// Loaded `.semver.toml`, or defaults
    pub config: Config,
    /// Version file store
    pub store: Store,
}

impl Context {
    /// Builds a context for the project in `dir`
    ///
    /// # Errors
    ///
    /// Returns `SemverError::Config` if `.semver.toml` exists but is invalid.
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self, SemverError> {
        let dir = dir.into();
        let config = Config::discover(&dir)?;
        Ok(Self::with_config(dir, config))
    }

    /// Builds a context from an already loaded configuration
    pub fn with_config(dir: impl Into<PathBuf>, config: Config) -> Self {
        let dir = dir.into();
        let store = Store::new(config.version_file(&dir));
        Self { dir, config, store }
    }
}

/// Project directory: the `--dir` option, else the current directory
pub fn resolve_dir(dir: Option<&Path>) -> io::Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir(),
    }
}

/// Whether to emit color, given the command line and the config file
///
/// The command line wins. `auto` enables color only when `is_terminal` holds.
pub fn use_color(cli: Option<ColorOption>, config: ColorOption, is_terminal: bool) -> bool {
    match cli.unwrap_or(config) {
        ColorOption::Always => true,
        ColorOption::Never => false,
        ColorOption::Auto => is_terminal,
    }
}

fn color_choice(enabled: bool) -> termcolor::ColorChoice {
    if enabled {
        termcolor::ColorChoice::Always
    } else {
        termcolor::ColorChoice::Never
    }
}

/// Runs a command body with a loaded context and colored stdout
///
/// Errors are reported on stderr and mapped to an exit code. A missing
/// version file prints guidance and counts as success.
pub fn run<F>(options: &GlobalOptions, body: F) -> i32
where
    F: FnOnce(&Context, &mut StandardStream) -> Result<(), SemverError>,
{
    let cli_color = options.color.map(ColorOption::from);
    let stdout_is_terminal = io::stdout().is_terminal();

    let ctx = match resolve_dir(options.dir.as_deref())
        .map_err(SemverError::from)
        .and_then(Context::load)
    {
        Ok(ctx) => ctx,
        Err(e) => {
            let color = use_color(cli_color, ColorOption::Auto, stdout_is_terminal);
            return report_error(&e, color);
        }
    };

    let color = use_color(cli_color, ctx.config.output.color, stdout_is_terminal);
    let mut out = StandardStream::stdout(color_choice(color));
    let result = finish(body(&ctx, &mut out), &mut out);

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e, color),
    }
}

/// Flushes `out` after a command body, surfacing a failed flush as an error
///
/// An error from the body takes precedence over one from the flush.
pub fn finish(result: Result<(), SemverError>, out: &mut impl Write) -> Result<(), SemverError> {
    let flushed = out.flush();
    result?;
    flushed.map_err(SemverError::from)
}

/// Prints `err` and returns the matching exit code
pub fn report_error(err: &SemverError, color: bool) -> i32 {
    if let SemverError::NotInitialized { .. } = err {
        let mut out = StandardStream::stdout(color_choice(color));
        let _ = write_not_initialized(&mut out, err);
        return EXIT_SUCCESS;
    }

    tracing::debug!(error = ?err, "command failed");
    let mut stderr = StandardStream::stderr(color_choice(color));
    let _ = write_error(&mut stderr, err);
    exit_code(err)
}

/// Exit code for a failed command
pub fn exit_code(err: &SemverError) -> i32 {
    match err {
        SemverError::NotInitialized { .. } => EXIT_SUCCESS,
        e if e.is_user_error() => EXIT_INVALID_INPUT,
        _ => EXIT_ERROR,
    }
}

/// Writes `Error: <message>` with a red prefix
pub fn write_error(out: &mut impl WriteColor, err: &SemverError) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "Error:")?;
    out.reset()?;
    writeln!(out, " {err}")
}

/// Writes the guidance shown when no version file exists
pub fn write_not_initialized(out: &mut impl WriteColor, err: &SemverError) -> io::Result<()> {
    writeln!(out, "{err}")?;
    writeln!(out, "Please either change directory or first run 'semver init'")
}

/// Outcome of a command that computes a new version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Version read from the file
    pub current: Version,
    /// Version after the mutation
    pub new: Version,
    /// Whether the file was left untouched
    pub dry_run: bool,
}

/// Writes `new` unless `dry_run` is set, and reports the outcome
///
/// The `Current Version` and action lines are expected to have been written
/// already.
pub fn commit(
    ctx: &Context,
    out: &mut impl WriteColor,
    current: Version,
    new: Version,
    dry_run: bool,
) -> Result<Change, SemverError> {
    if dry_run {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "[dry-run]")?;
        out.reset()?;
        writeln!(
            out,
            " New Version would be: {new} ({} file unchanged)",
            file_label(&ctx.store)
        )?;
    } else {
        ctx.store.write(&new)?;
        write!(out, "New Version: ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "{new}")?;
        out.reset()?;
        writeln!(out)?;
    }

    Ok(Change {
        current,
        new,
        dry_run,
    })
}

/// File name shown in messages
pub fn file_label(store: &Store) -> String {
    store
        .path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| store.path().display().to_string())
}
