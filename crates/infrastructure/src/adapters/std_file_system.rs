//! Real file system implementation.

use std::io::Write;
use std::path::Path;

use enumforge_application::{FileSystem, FileSystemError};

/// Real file system implementation using `std::fs`.
///
/// Writes are staged through a temporary file in the destination
/// directory and renamed into place, so the destination path never holds
/// a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Creates a new `StdFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        std::fs::create_dir_all(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                FileSystemError::PermissionDenied(path.to_path_buf())
            } else {
                FileSystemError::Io(e)
            }
        })
    }

    fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        let directory = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut staged = tempfile::Builder::new()
            .prefix(".enumforge-")
            .tempfile_in(directory.unwrap_or_else(|| Path::new(".")))?;

        staged.write_all(contents)?;
        staged.flush()?;
        staged
            .persist(path)
            .map_err(|e| FileSystemError::Io(e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
}
