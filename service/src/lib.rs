//! HTTP service wrapping caresheet profile sheet generation.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health_check))
        .route("/api/v1/profile-sheets", post(api::generate_sheet))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
