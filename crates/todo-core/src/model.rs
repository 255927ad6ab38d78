//! The todo record and the request payloads that produce it.
//!
//! [`TodoPayload`] is the untrusted body of a create or full-update request.
//! Its fields stay as raw JSON values so the validator can tell an absent
//! field apart from `null` and from a value of the wrong type.
//! [`TodoPayload::validate`] turns it into a [`TodoDraft`], which is what the
//! storage layer accepts.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::TodoId;
use crate::validate::{check_description, resolve_status, sanitize_title};

/// Lifecycle state of a todo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Incomplete,
    InProgress,
    Complete,
    Archived,
}

impl Status {
    /// All statuses in declaration order.
    pub const ALL: [Status; 4] = [
        Status::Incomplete,
        Status::InProgress,
        Status::Complete,
        Status::Archived,
    ];

    /// Wire and column representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Incomplete => "incomplete",
            Status::InProgress => "in-progress",
            Status::Complete => "complete",
            Status::Archived => "archived",
        }
    }

    /// Exact, case-sensitive match against the wire representation.
    pub fn parse(raw: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
}

/// Raw body of `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
}

/// A validated, normalized todo that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
}

impl TodoPayload {
    /// Parses a request body. Anything that is not a JSON object is
    /// [`ValidationError::InvalidJson`].
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| ValidationError::InvalidJson)?;
        if !value.is_object() {
            return Err(ValidationError::InvalidJson);
        }
        serde_json::from_value(value).map_err(|_| ValidationError::InvalidJson)
    }

    /// Runs only the title checks and returns the sanitized title.
    ///
    /// Absent or `null` is [`ValidationError::MissingTitle`]; anything that
    /// sanitizes to nothing is [`ValidationError::EmptyTitle`].
    pub fn validated_title(&self) -> Result<String, ValidationError> {
        let present = matches!(&self.title, Some(v) if !v.is_null());
        if !present {
            return Err(ValidationError::MissingTitle);
        }
        let title = sanitize_title(self.title.as_ref());
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(title)
    }

    /// Validates and normalizes the payload.
    ///
    /// Checks run in a fixed order and the first failure wins: title
    /// presence, title content, description type, description content.
    /// Status never fails; unknown values become [`Status::Incomplete`].
    pub fn validate(self) -> Result<TodoDraft, ValidationError> {
        let title = self.validated_title()?;

        let description = match self.description {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => return Err(ValidationError::InvalidDescription),
        };
        check_description(description.as_deref())?;

        let status = resolve_status(self.status.as_ref());

        Ok(TodoDraft {
            title,
            description,
            status,
        })
    }
}
