//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during model resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A flag definition declares more bits than the 32-bit representation
    /// can hold without sign/overflow ambiguity.
    #[error("flag definition '{definition}' declares {bits} bits; at most 31 fit a 32-bit representation")]
    FlagOverflow {
        /// Name of the offending flag definition.
        definition: String,
        /// Number of bits the definition declares.
        bits: usize,
    },

    /// A user-supplied member name collides with a generated sentinel.
    #[error("definition '{definition}' declares '{name}', which is reserved for a generated member")]
    ReservedName {
        /// Name of the offending definition.
        definition: String,
        /// The reserved member name.
        name: String,
    },

    /// Two definitions resolve to the same final type name.
    #[error("definitions '{first}' and '{second}' both resolve to type name '{type_name}'")]
    DuplicateTypeName {
        /// Name of the first definition involved in the collision.
        first: String,
        /// Name of the second definition involved in the collision.
        second: String,
        /// The shared resolved type name.
        type_name: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
