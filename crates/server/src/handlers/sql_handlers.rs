//! # Stateless SQL Handlers
//!
//! Generation and execution without any session context.

use super::{AppError, AppState};
use crate::types::{ExecuteSqlRequest, GenerateSqlRequest, GenerateSqlResponse};
use axum::{extract::State, Json};
use nl2sql::Row;
use tracing::info;

/// Handler for `/generate-sql`. Returns the model's SQL without executing it.
pub async fn generate_sql_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<GenerateSqlRequest>,
) -> Result<Json<GenerateSqlResponse>, AppError> {
    info!("Received generate-sql request: '{}'", payload.query);

    let sql = app_state.executor.generate_sql(&payload.query).await?;

    Ok(Json(GenerateSqlResponse { sql }))
}

/// Handler for `/execute-sql`. Only read-only statements reach the database.
pub async fn execute_sql_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ExecuteSqlRequest>,
) -> Result<Json<Vec<Row>>, AppError> {
    info!("Received execute-sql request: '{}'", payload.sql);

    let rows = app_state.executor.execute_sql(&payload.sql).await?;

    Ok(Json(rows))
}
