pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pitch::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Journalist roster (read-only)
        .route(
            "/api/v1/journalists",
            get(handlers::handle_list_journalists),
        )
        // Pitch workflow sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).patch(handlers::handle_update_session),
        )
        .route("/api/v1/sessions/:id/match", post(handlers::handle_match))
        .route("/api/v1/sessions/:id/select", post(handlers::handle_select))
        .route(
            "/api/v1/sessions/:id/generate",
            post(handlers::handle_generate),
        )
        .with_state(state)
}
