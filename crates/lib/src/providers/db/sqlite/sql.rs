//! # SQLite Specific SQL Queries
//!
//! This module centralizes SQL query strings for the SQLite provider.
//! This makes the core logic cleaner and isolates database-specific syntax.

/// The append-only log of session turns. `id` provides the append order.
pub const CREATE_CONVERSATION_HISTORY_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS conversation_history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        session_id TEXT NOT NULL,
        user_request TEXT NOT NULL,
        ai_response TEXT NOT NULL,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

pub const CREATE_CONVERSATION_HISTORY_INDEX_SQL: &str = "
    CREATE INDEX IF NOT EXISTS idx_conversation_history_session_id
    ON conversation_history (session_id)";

/// Every statement `SqliteProvider::initialize_schema` runs, in order.
pub const ALL_TABLE_CREATION_SQL: [&str; 2] = [
    CREATE_CONVERSATION_HISTORY_TABLE_SQL,
    CREATE_CONVERSATION_HISTORY_INDEX_SQL,
];

/// Expects `session_id`, `user_request` and `ai_response` as parameters.
pub const INSERT_TURN_SQL: &str =
    "INSERT INTO conversation_history (session_id, user_request, ai_response) VALUES (?, ?, ?)";

/// Expects `session_id` as the single parameter.
pub const SELECT_HISTORY_SQL: &str =
    "SELECT user_request, ai_response FROM conversation_history WHERE session_id = ? ORDER BY id ASC";
