//! Filesystem size queries and well-known locations.
//!
//! Thin wrappers over `std::fs` metadata. Platform failures (missing path,
//! permission denied) are returned as [`Error::Io`] with the offending path.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;

use crate::error::{Error, Result};

/// Returns the size of the file at `path` in bytes.
///
/// # Errors
/// [`Error::Io`] if the path cannot be read or names a directory.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if meta.is_dir() {
        return Err(Error::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"),
        ));
    }
    Ok(meta.len())
}

/// Returns the total size in bytes of all regular files under `path`,
/// descending into every subdirectory.
///
/// Symbolic links are not followed and contribute nothing.
///
/// # Errors
/// [`Error::Io`] for the first entry that cannot be read.
pub fn directory_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let total = walk(path)?;
    tracing::debug!(path = %path.display(), total, "computed directory size");
    Ok(total)
}

fn walk(dir: &Path) -> Result<u64> {
    tracing::trace!(dir = %dir.display(), "visiting directory");
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut total = 0u64;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let entry_path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&entry_path, e))?;

        if file_type.is_file() {
            let meta = entry.metadata().map_err(|e| Error::io(&entry_path, e))?;
            total += meta.len();
        } else if file_type.is_dir() {
            total += walk(&entry_path)?;
        }
    }
    Ok(total)
}

/// Returns the current user's profile (home) directory.
///
/// # Errors
/// [`Error::Unavailable`] if the platform reports no home directory.
pub fn user_path() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(Error::Unavailable("user profile directory"))
}

/// Returns the root of the filesystem that holds the operating system.
///
/// `/` on Unix. On Windows, the drive root of `%SystemRoot%`, or `C:\`
/// when that variable is unset.
pub fn root_path() -> PathBuf {
    #[cfg(windows)]
    {
        std::env::var_os("SystemRoot")
            .and_then(|dir| path_root(Path::new(&dir)))
            .unwrap_or_else(|| PathBuf::from(r"C:\"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/")
    }
}

/// Returns the prefix and root components of `path`, or `None` for a
/// relative path.
pub fn path_root(path: &Path) -> Option<PathBuf> {
    let root: PathBuf = path
        .components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    if root.has_root() {
        Some(root)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
