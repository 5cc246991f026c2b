//! # The Core Executor
//!
//! This module defines the `QueryExecutor`, which is the primary entry point for
//! the natural-language-to-SQL pipeline. It holds the AI provider, the business
//! data store and the session store, and exposes one high-level method per
//! operation so that any consumer (like the `server` crate) can drive it.

use crate::{
    errors::PromptError,
    generation::generate_sql,
    guard::is_read_only,
    oracle::check_data_existence,
    providers::{ai::AiProvider, db::storage::Storage},
    session::{format_ai_response, new_session_id, SessionStore},
    types::{CheckAndExecuteResponse, ConversationTurn, QueryResponse, Row},
};
use std::sync::Arc;
use tracing::{info, warn};

/// A struct that holds all the dependencies required to run the pipeline.
/// It is built once at startup and shared by every request.
#[derive(Debug)]
pub struct QueryExecutor {
    pub ai_provider: Box<dyn AiProvider>,
    pub data_store: Arc<dyn Storage>,
    pub session_store: Arc<dyn SessionStore>,
    /// Upper bound on the turns threaded into a prompt. `None` keeps them all.
    pub max_history_turns: Option<usize>,
}

impl QueryExecutor {
    /// Creates a new `QueryExecutor` that threads the full session history.
    pub fn new(
        ai_provider: Box<dyn AiProvider>,
        data_store: Arc<dyn Storage>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            ai_provider,
            data_store,
            session_store,
            max_history_turns: None,
        }
    }

    /// Limits the history used for context to the most recent `max_turns`.
    pub fn with_max_history_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_history_turns = max_turns;
        self
    }

    /// Mints a new session token.
    pub fn new_session(&self) -> String {
        let session_id = new_session_id();
        info!(session_id = %session_id, "Created new session.");
        session_id
    }

    /// Generates SQL for a standalone question, without session context.
    pub async fn generate_sql(&self, query: &str) -> Result<String, PromptError> {
        generate_sql(self.ai_provider.as_ref(), query, &[]).await
    }

    /// Runs `sql` against the data store if it is read-only.
    ///
    /// Non-read-only input fails with `PromptError::NotReadOnly` before the
    /// store is touched.
    pub async fn execute_sql(&self, sql: &str) -> Result<Vec<Row>, PromptError> {
        if !is_read_only(sql) {
            warn!(sql = %sql, "Rejected query that is not read-only.");
            return Err(PromptError::NotReadOnly(sql.to_string()));
        }
        info!(db = %self.data_store.name(), sql = %sql, "Executing read-only query.");
        self.data_store.execute_query(sql).await
    }

    /// Returns the history used as context for `session_id`, trimmed to the
    /// configured number of most recent turns.
    pub async fn history(&self, session_id: &str) -> Result<Vec<ConversationTurn>, PromptError> {
        let mut turns = self.session_store.history(session_id).await?;
        if let Some(max_turns) = self.max_history_turns {
            let excess = turns.len().saturating_sub(max_turns);
            turns.drain(..excess);
        }
        Ok(turns)
    }

    /// Generates SQL with session context, executes it and records the turn.
    ///
    /// A generated statement that is not read-only is not executed; the
    /// response carries it with an empty result set.
    pub async fn query(&self, session_id: &str, query: &str) -> Result<QueryResponse, PromptError> {
        info!(session_id = %session_id, "Executor received query: '{}'", query);

        let history = self.history(session_id).await?;
        let sql = generate_sql(self.ai_provider.as_ref(), query, &history).await?;
        let results = self.execute_or_empty(&sql).await?;

        self.record_turn(session_id, query, &sql, &results).await?;

        Ok(QueryResponse { sql, results })
    }

    /// Like `query`, but first asks the existence oracle whether the generated
    /// SQL would return data.
    ///
    /// The oracle is only consulted for read-only SQL; otherwise `data_exists`
    /// is `None` and nothing is executed.
    pub async fn check_and_execute(
        &self,
        session_id: &str,
        query: &str,
    ) -> Result<CheckAndExecuteResponse, PromptError> {
        info!(session_id = %session_id, "Executor received checked query: '{}'", query);

        let history = self.history(session_id).await?;
        let sql = generate_sql(self.ai_provider.as_ref(), query, &history).await?;

        let data_exists = if is_read_only(&sql) {
            check_data_existence(self.ai_provider.as_ref(), self.data_store.as_ref(), &sql).await?
        } else {
            None
        };
        let results = self.execute_or_empty(&sql).await?;

        self.record_turn(session_id, query, &sql, &results).await?;

        Ok(CheckAndExecuteResponse {
            data_exists,
            sql,
            results,
        })
    }

    /// Executes `sql`, substituting an empty result set for the read-only
    /// policy error. Engine errors still propagate.
    async fn execute_or_empty(&self, sql: &str) -> Result<Vec<Row>, PromptError> {
        match self.execute_sql(sql).await {
            Err(PromptError::NotReadOnly(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    async fn record_turn(
        &self,
        session_id: &str,
        query: &str,
        sql: &str,
        results: &[Row],
    ) -> Result<(), PromptError> {
        let ai_response = format_ai_response(sql, results)?;
        self.session_store
            .append(session_id, query, &ai_response)
            .await
    }
}
