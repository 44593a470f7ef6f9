//! CLI argument parsing and command dispatch

pub mod about;
pub mod args;
pub mod bump;
pub mod common;
pub mod init;
pub mod set;
pub mod show;

// Re-export types for convenient access
pub use args::{BumpComponent, Cli, ColorChoice, Command, GlobalOptions, SetArgs, SetTarget};
pub use common::{Change, Context};

use crate::output::OutputFormat;

/// Runs the parsed command line and returns the process exit code
pub fn dispatch(cli: Cli) -> i32 {
    let options = &cli.global;
    match cli.command {
        None => show::run_version(options, Some(OutputFormat::Plain.as_str())),
        Some(Command::Version { format }) => show::run_version(options, format.as_deref()),
        Some(Command::Init { force, initial }) => init::run_init(options, force, initial.as_deref()),
        Some(Command::Bump { component, dry }) => bump::run_bump(options, component.into(), dry),
        Some(Command::Set(args)) => set::run_set(options, &args),
        Some(Command::About { json }) => about::run_about(json),
    }
}
