//! # General Route Handlers
//!
//! This module contains the general-purpose Axum handlers for the `nl2sql-server`:
//! the root and health check endpoints.

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "nl2sql server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
