//! Application error types

use thiserror::Error;

use enumforge_domain::{DomainError, InterfaceKind};

use crate::ports::FileSystemError;

/// Errors produced by a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Model resolution failed (overflow, reserved name, name collision).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The output directory or a file could not be written.
    #[error("file system error: {0}")]
    FileSystem(#[from] FileSystemError),

    /// A requested surface has no registered emitter.
    #[error("no emitter registered for interface '{0}'")]
    MissingEmitter(InterfaceKind),
}

/// Result type alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
