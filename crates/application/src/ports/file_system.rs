//! File system abstraction port.

use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction over the file system operations a generation run needs.
///
/// This trait allows mocking file system access in tests.
pub trait FileSystem: Send + Sync {
    /// Creates a directory and all parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Writes a complete file, staging the contents so the destination is
    /// never observed half-written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;
}
