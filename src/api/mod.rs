mod handlers;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::TodoService;

pub fn create_router(service: TodoService) -> Router {
    let api = Router::new()
        // Todos
        .route("/todo/add", post(handlers::add_todo))
        .route("/todo/list", get(handlers::list_todos))
        .route("/todo/update", put(handlers::update_todo))
        .route(
            "/todo/mark-as-done/{id}/{is_done}",
            patch(handlers::mark_as_done),
        )
        .route("/todo/delete/{id}", delete(handlers::delete_todo))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
