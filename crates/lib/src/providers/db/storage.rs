use crate::{errors::PromptError, types::Row};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a storage backend.
///
/// Implementations run SQL text as given. Read-only enforcement happens before
/// a statement reaches this trait (see `crate::guard`).
#[async_trait]
pub trait Storage: Send + Sync + DynClone + Debug {
    /// Returns the name of the storage provider (e.g., "SQLite").
    fn name(&self) -> &str;

    /// Executes a SQL statement and returns every row, with columns in the
    /// order reported by the statement.
    async fn execute_query(&self, query: &str) -> Result<Vec<Row>, PromptError>;
}

dyn_clone::clone_trait_object!(Storage);
