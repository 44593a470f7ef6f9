#![forbid(unsafe_code)]

//! Version file persistence
//!
//! The version file holds a single line: the rendered version followed by a
//! newline. Writes go through a temporary file in the same directory that is
//! renamed over the target, so readers only ever see the old or the new
//! content. The replacement keeps the permissions of the file it replaces.
//! There is no locking; concurrent writers are not supported.

use crate::error::SemverError;
use crate::version::Version;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default version file name
pub const VERSION_FILE: &str = "VERSION";

/// Reads and writes the version file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    /// Creates a store for the default `VERSION` file inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Store::new(dir.as_ref().join(VERSION_FILE))
    }

    /// Path of the version file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the version file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the stored version, or `None` if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns `SemverError::Io` if the file cannot be read and
    /// `SemverError::InvalidFile` if its content is not a valid version.
    pub fn read(&self) -> Result<Option<Version>, SemverError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let version = Version::parse(&content).map_err(|source| SemverError::InvalidFile {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), %version, "read version file");
        Ok(Some(version))
    }

    /// Reads the stored version, treating a missing file as `NotInitialized`
    pub fn load(&self) -> Result<Version, SemverError> {
        self.read()?.ok_or_else(|| SemverError::NotInitialized {
            dir: self.dir().to_path_buf(),
        })
    }

    /// Atomically replaces the file content with `version` and a newline
    ///
    /// # Errors
    ///
    /// Returns `SemverError::Io` if the temporary file cannot be created,
    /// written, or renamed into place. The original file is untouched on error.
    pub fn write(&self, version: &Version) -> Result<(), SemverError> {
        let permissions = self.target_permissions()?;

        let mut tmp = NamedTempFile::new_in(self.dir())?;
        writeln!(tmp, "{version}")?;
        if let Some(permissions) = permissions {
            tmp.as_file().set_permissions(permissions)?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::info!(path = %self.path.display(), %version, "wrote version file");
        Ok(())
    }

    /// Permissions the written file should carry
    ///
    /// An existing file keeps its own; a new one gets `0644` on Unix.
    fn target_permissions(&self) -> io::Result<Option<fs::Permissions>> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(Some(metadata.permissions())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(new_file_permissions()),
            Err(e) => Err(e),
        }
    }

    /// Directory containing the version file
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

/// Mode for a newly created version file
pub const NEW_FILE_MODE: u32 = 0o644;

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
