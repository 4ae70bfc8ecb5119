//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p imgdrop-api`.

use axum_test::TestServer;
use imgdrop_api::constants;
use imgdrop_api::setup::routes;
use imgdrop_api::AppState;
use imgdrop_core::Config;
use imgdrop_processing::test_helpers::MockStorage;
use imgdrop_processing::{IngestPipeline, PipelineConfig};
use imgdrop_storage::{LocalStorage, Storage};
use std::sync::Arc;
use tempfile::TempDir;

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server plus the storage it uploads to.
pub struct TestApp<S> {
    pub server: TestServer,
    pub storage: Arc<S>,
}

impl<S> TestApp<S> {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

fn test_server(config: &Config, storage: Arc<dyn Storage>) -> TestServer {
    let pipeline = IngestPipeline::new(
        storage,
        PipelineConfig {
            upload_timeout: config.upload_timeout(),
        },
    );
    let router = routes::setup_routes(config, Arc::new(AppState::new(pipeline)));
    TestServer::new(router.into_make_service()).expect("Failed to create test server")
}

/// App backed by the given in-memory storage.
pub fn setup_test_app_with(storage: MockStorage) -> TestApp<MockStorage> {
    let storage = Arc::new(storage);
    let server = test_server(&Config::default(), storage.clone());
    TestApp { server, storage }
}

/// App backed by an in-memory storage that accepts every put.
pub fn setup_test_app() -> TestApp<MockStorage> {
    setup_test_app_with(MockStorage::new())
}

/// App backed by the filesystem storage in a fresh temp directory.
pub async fn setup_local_test_app() -> (TestApp<LocalStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Arc::new(
        LocalStorage::new(temp_dir.path(), "http://localhost:3000/media".to_string())
            .await
            .expect("Failed to create local storage"),
    );
    let server = test_server(&Config::default(), storage.clone());
    (TestApp { server, storage }, temp_dir)
}
