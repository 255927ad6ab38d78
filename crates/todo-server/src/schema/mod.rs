//! API schema types for request/response definitions.
//!
//! Request bodies for create and update are [`todo_core::TodoPayload`]; the
//! types here cover the remaining response shapes.

pub mod common;
pub mod todos;
