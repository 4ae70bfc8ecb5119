//! API constants

/// Versioned prefix for the HTTP upload route
pub const API_PREFIX: &str = "/api/v0";

/// Route accepting the JSON invocation envelope
pub const INVOKE_PATH: &str = "/invoke";
