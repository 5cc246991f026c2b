//! # Session Store
//!
//! Sessions are opaque tokens grouping an ordered list of turns. There is no
//! registration step: any token can be read (yielding an empty history) and the
//! first append to a token creates its session.

use crate::{
    errors::PromptError,
    types::{ConversationTurn, Row},
};
use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

/// A persistent, append-only log of session turns.
#[async_trait]
pub trait SessionStore: Send + Sync + Debug {
    /// Records one completed turn for `session_id`.
    async fn append(
        &self,
        session_id: &str,
        user_request: &str,
        ai_response: &str,
    ) -> Result<(), PromptError>;

    /// Returns every turn of `session_id` in append order. Unknown sessions
    /// yield an empty list.
    async fn history(&self, session_id: &str) -> Result<Vec<ConversationTurn>, PromptError>;
}

/// Mints a new, globally unique session token.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// The text recorded as the AI side of a turn: the generated SQL and the rows
/// it produced.
pub fn format_ai_response(sql: &str, results: &[Row]) -> Result<String, PromptError> {
    Ok(format!(
        "SQL: {sql}\nResult: {}",
        serde_json::to_string(results)?
    ))
}
