//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use imgdrop_core::Config;
use imgdrop_processing::{IngestPipeline, PipelineConfig};
use imgdrop_storage::create_storage;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry(config.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment,
        "Configuration loaded and validated successfully"
    );

    let state = Arc::new(build_state(&config).await?);
    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}

/// Build the storage client and the pipeline around it.
pub async fn build_state(config: &Config) -> Result<AppState> {
    tracing::info!("Initializing storage...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage")?;
    tracing::info!(
        backend = %storage.backend_type(),
        "Storage initialized successfully"
    );

    let pipeline = IngestPipeline::new(
        storage,
        PipelineConfig {
            upload_timeout: config.upload_timeout(),
        },
    );
    Ok(AppState::new(pipeline))
}
