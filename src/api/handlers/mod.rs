use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::models::{AddTodoRequest, UpdateTodoRequest};
use crate::service::{TodoError, TodoService};

// ============================================================
// Error Handling
// ============================================================

/// Map a service failure onto the transport contract: input failures become
/// 400s with the message text, everything else (including not-found) falls
/// through to a 500 carrying `{"error": <message>}`.
fn error_response(err: TodoError) -> Response {
    match err {
        TodoError::MissingPayload | TodoError::InvalidId => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": other.to_string() })),
        )
            .into_response(),
    }
}

fn message(text: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": text }))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Todos
// ============================================================

pub async fn add_todo(
    State(service): State<TodoService>,
    request: Option<Json<AddTodoRequest>>,
) -> Response {
    if let Some(Json(request)) = &request {
        if let Err(msg) = request.validate() {
            return (StatusCode::BAD_REQUEST, msg).into_response();
        }
    }

    match service.add_todo(request.map(|Json(request)| request)) {
        Ok(()) => (StatusCode::CREATED, message("Task added successfully.")).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn list_todos(State(service): State<TodoService>) -> Response {
    match service.list_todos() {
        Ok(todos) => Json(todos).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn update_todo(
    State(service): State<TodoService>,
    request: Option<Json<UpdateTodoRequest>>,
) -> Response {
    if let Some(Json(request)) = &request {
        if let Err(msg) = request.validate() {
            return (StatusCode::BAD_REQUEST, msg).into_response();
        }
    }

    match service.update_todo(request.map(|Json(request)| request)) {
        Ok(()) => message("Task updated successfully.").into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn mark_as_done(
    State(service): State<TodoService>,
    Path((id, is_done)): Path<(Uuid, bool)>,
) -> Response {
    if id.is_nil() {
        return (StatusCode::BAD_REQUEST, "Invalid ID.".to_string()).into_response();
    }

    match service.mark_done(id, is_done) {
        Ok(()) => {
            let text = if is_done {
                "Task marked as done."
            } else {
                "Task marked as not done."
            };
            message(text).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub async fn delete_todo(State(service): State<TodoService>, Path(id): Path<Uuid>) -> Response {
    if id.is_nil() {
        return (StatusCode::BAD_REQUEST, "Invalid ID.".to_string()).into_response();
    }

    match service.delete_todo(id) {
        Ok(()) => message("Task deleted successfully.").into_response(),
        Err(err) => error_response(err),
    }
}
