//! Route configuration and setup

use crate::constants::{API_PREFIX, INVOKE_PATH};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use imgdrop_core::Config;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    tracing::debug!(
        max_upload_size_bytes = config.max_upload_size_bytes,
        "Configuring routes"
    );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(INVOKE_PATH, post(handlers::ingest::invoke))
        .route(
            &format!("{}/images", API_PREFIX),
            post(handlers::ingest::upload_image),
        )
        // The configured limit replaces axum's 2 MB default
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
