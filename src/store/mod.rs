use std::sync::{Arc, Mutex};

use thiserror::Error;
use uuid::Uuid;

use crate::models::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The targeted record does not exist. Carries the operation noun used
    /// in the client-facing message ("update" or "deletion").
    #[error("Task not found for {0}.")]
    NotFound(&'static str),
}

/// In-memory authoritative collection of task records.
///
/// One store is created per process and cloned into request state; clones
/// share the same underlying collection. A single mutex serializes all
/// operations, so each call is atomic relative to the others. Nothing
/// survives a restart.
#[derive(Clone, Default)]
pub struct TodoStore {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record. The caller supplies a freshly generated id.
    pub fn add(&self, todo: Todo) {
        let mut todos = self.todos.lock().expect("store lock poisoned");
        todos.push(todo);
    }

    /// Every stored record, ordered ascending by deadline. Equal deadlines
    /// keep insertion order (the sort is stable).
    pub fn list_all(&self) -> Vec<Todo> {
        let todos = self.todos.lock().expect("store lock poisoned");
        let mut sorted = todos.clone();
        sorted.sort_by_key(|todo| todo.deadline);
        sorted
    }

    /// Overwrite task, deadline and done flag of the record matching
    /// `updated.id`. The id itself is never reassigned.
    pub fn update(&self, updated: Todo) -> Result<(), StoreError> {
        let mut todos = self.todos.lock().expect("store lock poisoned");
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == updated.id)
            .ok_or(StoreError::NotFound("update"))?;
        todo.task = updated.task;
        todo.deadline = updated.deadline;
        todo.is_done = updated.is_done;
        Ok(())
    }

    /// Set the done flag on the record with the given id.
    pub fn mark_done(&self, id: Uuid, done: bool) -> Result<(), StoreError> {
        let mut todos = self.todos.lock().expect("store lock poisoned");
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound("update"))?;
        todo.is_done = done;
        Ok(())
    }

    /// Remove the record with the given id.
    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut todos = self.todos.lock().expect("store lock poisoned");
        let pos = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound("deletion"))?;
        todos.remove(pos);
        Ok(())
    }
}
