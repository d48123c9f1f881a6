use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/:id",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .route(
            "/api/todos/:id/toggle_completed",
            post(handlers::toggle_todo),
        )
        .route("/api/summary", get(handlers::get_summary))
        .with_state(state)
}
