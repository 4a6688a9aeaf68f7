//! Validation and delegation layer between the HTTP handlers and the store.
//!
//! Every operation checks its inputs, delegates to [`TodoStore`], and logs an
//! error-level event before propagating any failure. No operation recovers
//! or retries; all failures are terminal for the call.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{AddTodoRequest, Todo, UpdateTodoRequest};
use crate::store::{StoreError, TodoStore};

/// Failure modes surfaced by [`TodoService`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    /// A required request payload was absent.
    #[error("Request payload is required.")]
    MissingPayload,
    /// The nil identifier was supplied to an id-based operation.
    #[error("Invalid ID.")]
    InvalidId,
    /// The targeted record does not exist.
    #[error(transparent)]
    NotFound(#[from] StoreError),
}

#[derive(Clone)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Build a task from the request (fresh id, not done) and insert it.
    pub fn add_todo(&self, request: Option<AddTodoRequest>) -> Result<(), TodoError> {
        with_error_log("add_todo", || {
            let request = request.ok_or(TodoError::MissingPayload)?;
            let todo = Todo {
                id: Uuid::new_v4(),
                task: request.task,
                deadline: request.deadline,
                is_done: false,
            };
            self.store.add(todo);
            Ok(())
        })
    }

    /// All tasks, ordered ascending by deadline.
    pub fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        with_error_log("list_todos", || Ok(self.store.list_all()))
    }

    /// Replace the task identified by `request.id` with the supplied fields.
    pub fn update_todo(&self, request: Option<UpdateTodoRequest>) -> Result<(), TodoError> {
        with_error_log("update_todo", || {
            let request = request.ok_or(TodoError::MissingPayload)?;
            let todo = Todo {
                id: request.id,
                task: request.task,
                deadline: request.deadline,
                is_done: request.is_done,
            };
            Ok(self.store.update(todo)?)
        })
    }

    /// Set the done flag on the task with the given id.
    pub fn mark_done(&self, id: Uuid, done: bool) -> Result<(), TodoError> {
        with_error_log("mark_done", || {
            if id.is_nil() {
                return Err(TodoError::InvalidId);
            }
            Ok(self.store.mark_done(id, done)?)
        })
    }

    /// Remove the task with the given id.
    pub fn delete_todo(&self, id: Uuid) -> Result<(), TodoError> {
        with_error_log("delete_todo", || {
            if id.is_nil() {
                return Err(TodoError::InvalidId);
            }
            Ok(self.store.delete(id)?)
        })
    }
}

/// Run an operation, logging any failure before it propagates.
fn with_error_log<T>(
    op: &'static str,
    f: impl FnOnce() -> Result<T, TodoError>,
) -> Result<T, TodoError> {
    f().inspect_err(|err| tracing::error!("{} failed: {}", op, err))
}
