//! Validation errors for todo-core.
//!
//! The `Display` text of every variant is the exact message returned to API
//! clients, so it must stay stable.

use thiserror::Error;

/// A request was rejected before reaching storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The id was not a strictly positive integer.
    #[error("Invalid ID")]
    InvalidId,

    /// The request body was not a JSON object.
    #[error("Invalid JSON")]
    InvalidJson,

    /// `title` was absent or null.
    #[error("Title required")]
    MissingTitle,

    /// `title` was present but empty after sanitization.
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// `description` was neither a string nor null.
    #[error("Description must be a string")]
    InvalidDescription,

    /// `description` exceeded [`crate::MAX_DESCRIPTION_LEN`] characters.
    #[error("Description too long (max 1000 characters)")]
    DescriptionTooLong,

    /// `description` hit the secondary content check.
    #[error("Description contains invalid content")]
    DescriptionRejected,
}
