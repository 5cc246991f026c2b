//! # API Payloads
//!
//! Request and response bodies for the HTTP surface. Responses that the
//! library already models (`QueryResponse`, `CheckAndExecuteResponse`,
//! `ConversationTurn`) are serialized as-is.

use serde::{Deserialize, Serialize};

/// The request body for the `/generate-sql` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateSqlRequest {
    pub query: String,
}

/// The response body for the `/generate-sql` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateSqlResponse {
    pub sql: String,
}

/// The request body for the `/execute-sql` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExecuteSqlRequest {
    pub sql: String,
}

/// The request body for the `/query` and `/check-and-execute` endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionQueryRequest {
    pub session_id: String,
    pub query: String,
}

/// The request body for the `/history` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryRequest {
    pub session_id: String,
}

/// The response body for the `/new-session` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewSessionResponse {
    pub session_id: String,
}
