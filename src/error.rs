//! Error types for tag collection operations.

use thiserror::Error;

/// Validation failures for tag mutations.
///
/// These are always recovered locally: the triggering operation aborts, the
/// collection is left unchanged, and the error is surfaced to the user as a
/// transient warning. They are never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Tag name is empty after trimming
    #[error("Tag name cannot be empty")]
    EmptyName,

    /// Tag name exceeds the maximum length
    #[error("Tag name is too long ({len} characters, maximum is {max})")]
    NameTooLong {
        /// Length of the rejected name in characters
        len: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// A tag with this name already exists (trimmed, case-insensitive)
    #[error("A tag named '{name}' already exists")]
    DuplicateName {
        /// The conflicting name as submitted
        name: String,
    },
}

impl ValidationError {
    /// Create a duplicate-name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}
