pub mod health;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(|| async { Redirect::to("/analyzer") }))
        .route(
            "/analyzer",
            get(handlers::show_analyzer).post(handlers::submit_analyzer),
        )
        .route("/analyzer/reset", post(handlers::reset_analyzer))
        .route(
            "/coach",
            get(handlers::show_coach).post(handlers::submit_coach),
        )
        .route("/coach/reset", post(handlers::reset_coach))
        .with_state(state)
}
