use crate::{
    errors::PromptError,
    providers::db::storage::Storage,
    schema::BUSINESS_TABLES_SQL,
    session::SessionStore,
    types::{ConversationTurn, Row},
};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::{self, Debug};
use tracing::{debug, info};
use turso::{Database, Value as TursoValue};

mod sql;

/// A provider for interacting with a local SQLite database using Turso.
///
/// Every operation opens its own connection and drops it when the operation
/// returns, on success and on error alike. When cloned, the provider shares the
/// same underlying database, so one in-memory instance can serve several
/// handles (e.g., in tests).
#[derive(Clone)]
pub struct SqliteProvider {
    /// The Turso database instance. It's cloneable and thread-safe.
    pub db: Database,
}

impl SqliteProvider {
    /// Creates a new `SqliteProvider` from a file path or in-memory.
    ///
    /// # Arguments
    ///
    /// * `db_path`: The path to the SQLite database file. Use ":memory:" for a unique,
    ///   isolated in-memory database.
    pub async fn new(db_path: &str) -> Result<Self, PromptError> {
        let db = turso::Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| PromptError::StorageConnection(e.to_string()))?;

        // WAL lets readers proceed while a session turn is being appended.
        // It has no effect on in-memory databases.
        let conn = db
            .connect()
            .map_err(|e| PromptError::StorageConnection(e.to_string()))?;
        // Use `query` for PRAGMA statements that return a value to avoid "unexpected row" errors.
        conn.query("PRAGMA journal_mode=WAL;", ())
            .await
            .map_err(|e| PromptError::StorageConnection(e.to_string()))?;

        Ok(Self { db })
    }

    fn connect(&self) -> Result<turso::Connection, PromptError> {
        self.db
            .connect()
            .map_err(|e| PromptError::StorageConnection(e.to_string()))
    }

    /// A helper for tests and seeding to execute multiple `;`-separated statements.
    pub async fn initialize_with_data(&self, init_sql: &str) -> Result<(), PromptError> {
        let conn = self.connect()?;

        for statement in init_sql.split(';').filter(|s| !s.trim().is_empty()) {
            conn.execute(statement, ())
                .await
                .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;
        }
        Ok(())
    }

    /// Ensures the session history table and its index exist.
    /// This function is idempotent and safe to call on every application startup.
    pub async fn initialize_schema(&self) -> Result<(), PromptError> {
        let conn = self.connect()?;

        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ())
                .await
                .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;
        }
        Ok(())
    }

    /// Creates the retail tables (`Products`, `Transactions`, `Stores`) if they
    /// are missing. Idempotent.
    pub async fn initialize_business_schema(&self) -> Result<(), PromptError> {
        let conn = self.connect()?;

        for statement in BUSINESS_TABLES_SQL {
            conn.execute(statement, ())
                .await
                .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;
        }
        info!("Business tables are present.");
        Ok(())
    }
}

impl Debug for SqliteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProvider").finish_non_exhaustive()
    }
}

/// Converts a Turso value to a serde_json::Value.
fn turso_value_to_json(v: TursoValue) -> Value {
    match v {
        TursoValue::Null => Value::Null,
        TursoValue::Integer(i) => Value::Number(i.into()),
        TursoValue::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        TursoValue::Text(s) => Value::String(s),
        TursoValue::Blob(_) => Value::String("<blob>".to_string()),
    }
}

fn text_or_empty(v: TursoValue) -> String {
    match v {
        TursoValue::Text(s) => s,
        _ => String::new(),
    }
}

#[async_trait]
impl Storage for SqliteProvider {
    fn name(&self) -> &str {
        "SQLite"
    }

    /// Executes a query on SQLite and returns the rows as ordered JSON maps.
    async fn execute_query(&self, query: &str) -> Result<Vec<Row>, PromptError> {
        debug!(query = %query, "--> Executing SQLite query");

        let conn = self.connect()?;

        let mut stmt = conn
            .prepare(query)
            .await
            .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;

        let column_names: Vec<String> = stmt
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let mut rows = stmt
            .query(())
            .await
            .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;

        let mut results: Vec<Row> = Vec::new();

        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?
        {
            let mut row_map = Row::new();
            for (i, name) in column_names.iter().enumerate() {
                let value = row
                    .get_value(i)
                    .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;
                row_map.insert(name.clone(), turso_value_to_json(value));
            }
            results.push(row_map);
        }

        debug!(rows = results.len(), "<-- SQLite query finished");
        Ok(results)
    }
}

#[async_trait]
impl SessionStore for SqliteProvider {
    async fn append(
        &self,
        session_id: &str,
        user_request: &str,
        ai_response: &str,
    ) -> Result<(), PromptError> {
        let conn = self.connect()?;
        conn.execute(
            sql::INSERT_TURN_SQL,
            turso::params![
                session_id.to_string(),
                user_request.to_string(),
                ai_response.to_string()
            ],
        )
        .await
        .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;

        debug!(session_id = %session_id, "Appended turn to session history.");
        Ok(())
    }

    async fn history(&self, session_id: &str) -> Result<Vec<ConversationTurn>, PromptError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(sql::SELECT_HISTORY_SQL, turso::params![session_id.to_string()])
            .await
            .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;

        let mut turns = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?
        {
            let user = row
                .get_value(0)
                .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;
            let ai = row
                .get_value(1)
                .map_err(|e| PromptError::StorageOperationFailed(e.to_string()))?;
            turns.push(ConversationTurn::new(text_or_empty(user), text_or_empty(ai)));
        }

        debug!(session_id = %session_id, turns = turns.len(), "Loaded session history.");
        Ok(turns)
    }
}
