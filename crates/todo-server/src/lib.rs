//! HTTP/JSON API server for todos.
//!
//! Exposes list, fetch, create, full-update and delete over a single todo
//! table. This crate contains the request handling service, API schema
//! types, error mapping, configuration and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
