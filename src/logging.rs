//! Diagnostic logging setup
//!
//! User-facing output goes to stdout through the command handlers. Everything
//! emitted with `tracing` is diagnostic and lands on stderr.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Log level for a given `-v`/`-q` count
///
/// The default is `warn`. Each `-v` raises it one step up to `trace`; any
/// `-q` lowers it to `error`.
pub fn level_for(verbose: u8, quiet: u8) -> LevelFilter {
    if quiet > 0 {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Builds the filter from `RUST_LOG`, falling back to `level`
///
/// An unparsable `RUST_LOG` is reported and ignored.
pub fn env_filter(level: LevelFilter, directive: Option<&str>) -> EnvFilter {
    let default_filter = || {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy("")
    };

    match directive {
        Some(directive) if !directive.trim().is_empty() => {
            match EnvFilter::builder()
                .with_default_directive(level.into())
                .parse(directive)
            {
                Ok(filter) => filter,
                Err(err) => {
                    eprintln!("invalid log filter: {err}");
                    eprintln!("falling back to default logging");
                    default_filter()
                }
            }
        }
        _ => default_filter(),
    }
}

/// Installs the global subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn setup(verbose: u8, quiet: u8, use_color: bool) {
    let directive = std::env::var("RUST_LOG").ok();
    let filter = env_filter(level_for(verbose, quiet), directive.as_deref());

    let installed = tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(use_color)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();

    if installed.is_err() {
        tracing::debug!("logging already initialized");
    }
}
