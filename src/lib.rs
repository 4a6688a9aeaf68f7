//! Minimal task-tracking service.
//!
//! HTTP handlers delegate to a validation service ([`service::TodoService`]),
//! which owns all access to the in-memory task store ([`store::TodoStore`]).

pub mod api;
pub mod models;
pub mod service;
pub mod store;
