//! Domain model and input validation for the todo API.
//!
//! This crate has no I/O. It defines the [`Todo`] record, its [`Status`]
//! enumeration, the [`TodoId`] newtype, and the validator that turns an
//! untrusted [`TodoPayload`] into a normalized [`TodoDraft`].

pub mod error;
pub mod id;
pub mod model;
pub mod validate;

// Re-export commonly used types
pub use error::ValidationError;
pub use id::TodoId;
pub use model::{Status, Todo, TodoDraft, TodoPayload};
pub use validate::{
    check_description, is_description_acceptable, is_valid_status, resolve_status,
    sanitize_title, validate_id, MAX_DESCRIPTION_LEN,
};
