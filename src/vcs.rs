#![forbid(unsafe_code)]

//! Source-control queries
//!
//! Only two questions are ever asked of the VCS: whether a directory is a
//! checkout, and what the short hash of the current revision is. The latter
//! sits behind [`RevisionSource`] so commands can be exercised without git.

use crate::error::VcsError;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Metadata directory that marks a git checkout
pub const GIT_DIR: &str = ".git";

/// Supplies an identifier for the current source revision
pub trait RevisionSource {
    /// Short hash of the checked-out revision, without surrounding whitespace
    fn short_revision(&self) -> Result<String, VcsError>;
}

/// Whether `dir` is the root of a git checkout
///
/// Worktrees and submodules use a `.git` file instead of a directory, so any
/// entry with that name counts.
pub fn is_checkout(dir: &Path) -> bool {
    dir.join(GIT_DIR).exists()
}

/// Git repository queried through the `git` executable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitRepository {
    path: PathBuf,
}

impl GitRepository {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RevisionSource for GitRepository {
    fn short_revision(&self) -> Result<String, VcsError> {
        let mut cmd = Command::new("git");
        cmd.args(["rev-parse", "--short", "HEAD"])
            .current_dir(&self.path);

        let stdout = run_command(&mut cmd)?;
        let revision = stdout.trim();
        if revision.is_empty() {
            return Err(VcsError::EmptyOutput {
                command: describe(&cmd),
            });
        }

        tracing::debug!(revision, "resolved git revision");
        Ok(revision.to_string())
    }
}

/// Runs `cmd` and returns its stdout, failing on a non-zero exit status
fn run_command(cmd: &mut Command) -> Result<String, VcsError> {
    tracing::trace!(command = %describe(cmd), "running");
    let output = cmd.output().map_err(|source| VcsError::Spawn {
        command: describe(cmd),
        source,
    })?;
    check_exit_status(cmd, &output)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn check_exit_status(cmd: &Command, output: &Output) -> Result<(), VcsError> {
    if output.status.success() {
        Ok(())
    } else {
        Err(VcsError::Failed {
            command: describe(cmd),
            code: output.status.code().unwrap_or(1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

fn describe(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}
