//! Domain models for the task-tracking service.
//!
//! [`Todo`] is the sole entity: a description, a deadline, a completion flag
//! and a unique id. [`AddTodoRequest`] and [`UpdateTodoRequest`] are the
//! request contracts accepted at the HTTP boundary; their `validate` methods
//! enforce the minimum task length so the store never has to.

mod todo;

pub use todo::*;
