pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Editor page props
        .route("/resume", get(handlers::handle_resume_page))
        // Resume actions
        .route(
            "/api/v1/resume",
            get(handlers::handle_get_resume).put(handlers::handle_save_resume),
        )
        .route("/api/v1/resume/improve", post(handlers::handle_improve))
        .with_state(state)
}
