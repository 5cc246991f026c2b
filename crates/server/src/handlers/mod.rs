//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `nl2sql-server`.
//! The handlers are split into logical sub-modules: stateless probes, the
//! single-shot SQL endpoints, and the session-aware endpoints.

// Sub-modules for different handler categories.
pub mod general;
pub mod session_handlers;
pub mod sql_handlers;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use general::*;
pub use session_handlers::*;
pub use sql_handlers::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState};
