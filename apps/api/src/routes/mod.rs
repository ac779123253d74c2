pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommend),
        )
        .route("/api/v1/careers", get(handlers::handle_list_careers))
        .route("/api/v1/careers/:name", get(handlers::handle_get_career))
        .with_state(state)
}
