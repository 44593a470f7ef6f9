//! semver CLI entry point

use clap::Parser;
use semver_cli::cli::{self, ColorChoice, args::Cli};
use std::io::IsTerminal;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_color = match cli.global.color {
        Some(ColorChoice::Always) => true,
        Some(ColorChoice::Never) => false,
        Some(ColorChoice::Auto) | None => std::io::stderr().is_terminal(),
    };
    let verbosity = cli.global.verbosity;
    semver_cli::logging::setup(verbosity.verbose, verbosity.quiet, log_color);

    let exit_code = cli::dispatch(cli);

    process::exit(exit_code);
}
