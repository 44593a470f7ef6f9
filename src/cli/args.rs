//! CLI argument parsing using clap

use crate::config::ColorOption;
use crate::version::Component;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorOption::Auto,
            ColorChoice::Always => ColorOption::Always,
            ColorChoice::Never => ColorOption::Never,
        }
    }
}

/// Version component selected by `semver bump`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpComponent {
    Major,
    Minor,
    Patch,
}

impl From<BumpComponent> for Component {
    fn from(component: BumpComponent) -> Self {
        match component {
            BumpComponent::Major => Component::Major,
            BumpComponent::Minor => Component::Minor,
            BumpComponent::Patch => Component::Patch,
        }
    }
}

/// Semver CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "semver")]
#[command(about = "Track and bump a semantic version stored in a VERSION file")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (prints the current version when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Project directory holding the version file (defaults to the current directory)
    #[arg(short = 'C', long, global = true, env = "SEMVER_DIR")]
    pub dir: Option<PathBuf>,

    /// Output coloring (overrides the config file)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Logging verbosity flags
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct Verbosity {
    /// Increase logging verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease logging verbosity
    #[arg(
        short = 'q',
        long,
        action = clap::ArgAction::Count,
        global = true,
        conflicts_with = "verbose"
    )]
    pub quiet: u8,
}

/// Available semver subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current version
    Version {
        /// Print format [string | json | pretty]
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Create the VERSION file for this project
    Init {
        /// Overwrite an existing VERSION file without asking
        #[arg(long)]
        force: bool,

        /// Starting version (prompts when omitted)
        #[arg(long, value_name = "VERSION")]
        initial: Option<String>,
    },

    /// Bump the major, minor or patch version
    Bump {
        /// Component to bump
        #[arg(value_enum, default_value = "patch")]
        component: BumpComponent,

        /// Report the new version without writing it
        #[arg(short, long)]
        dry: bool,
    },

    /// Set the full version, the pre-release or the build metadata
    Set(SetArgs),

    /// Print information about this tool
    About {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Arguments of `semver set`
#[derive(Args, Debug)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub struct SetArgs {
    /// New full version
    #[arg(required = true)]
    pub version: Option<String>,

    /// Report the new version without writing it
    #[arg(short, long, global = true)]
    pub dry: bool,

    #[command(subcommand)]
    pub target: Option<SetTarget>,
}

/// Parts of the version `semver set` can change on their own
#[derive(Subcommand, Debug)]
pub enum SetTarget {
    /// Set, clear or advance the pre-release
    ///
    /// Without flags the pre-release advances: none -> alpha -> beta -> rc-1.0.
    Pre {
        /// Pre-release value
        #[arg(long)]
        value: Option<String>,

        /// Remove the pre-release
        #[arg(long)]
        clear: bool,
    },

    /// Set or clear the build metadata
    Build {
        /// Build metadata value
        #[arg(long)]
        value: Option<String>,

        /// Use the short hash of the current git revision
        #[arg(long)]
        git: bool,

        /// Remove the build metadata
        #[arg(long)]
        clear: bool,
    },
}
