//! # Session Handlers
//!
//! Endpoints that read or extend a session's conversation history. Sessions
//! need no registration: any `session_id` is accepted, and `/new-session` is
//! only a convenience for minting a fresh one.

use super::{AppError, AppState};
use crate::types::{HistoryRequest, NewSessionResponse, SessionQueryRequest};
use axum::{extract::State, Json};
use nl2sql::{CheckAndExecuteResponse, ConversationTurn, QueryResponse};
use tracing::info;

/// Handler for `/new-session`.
pub async fn new_session_handler(
    State(app_state): State<AppState>,
) -> Json<NewSessionResponse> {
    Json(NewSessionResponse {
        session_id: app_state.executor.new_session(),
    })
}

/// Handler for `/query`: generate with history, execute, record the turn.
pub async fn query_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SessionQueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    info!(session_id = %payload.session_id, "Received query: '{}'", payload.query);

    let response = app_state
        .executor
        .query(&payload.session_id, &payload.query)
        .await?;

    Ok(Json(response))
}

/// Handler for `/check-and-execute`: like `/query`, with the existence
/// oracle's verdict in `data_exists`.
pub async fn check_and_execute_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SessionQueryRequest>,
) -> Result<Json<CheckAndExecuteResponse>, AppError> {
    info!(session_id = %payload.session_id, "Received check-and-execute: '{}'", payload.query);

    let response = app_state
        .executor
        .check_and_execute(&payload.session_id, &payload.query)
        .await?;

    Ok(Json(response))
}

/// Handler for `/history`. Returns the turns that would be used as context.
pub async fn history_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<HistoryRequest>,
) -> Result<Json<Vec<ConversationTurn>>, AppError> {
    let turns = app_state.executor.history(&payload.session_id).await?;

    Ok(Json(turns))
}
