use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", post(handlers::create_session))
        .route("/api/today", get(handlers::today))
        .route("/api/submit", post(handlers::submit))
        .with_state(state)
}
