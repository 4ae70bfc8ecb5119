//! imgdrop API Library
//!
//! This crate provides the HTTP surface of the ingestion pipeline: the invocation
//! envelope, the upload and health handlers, error rendering and application setup.

pub mod constants;
pub mod envelope;
pub mod error;
mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use envelope::InvocationEnvelope;
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
