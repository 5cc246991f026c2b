//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The `AppState` holds the configuration and the
//! `QueryExecutor`, which owns the AI provider and both database handles.

use crate::config::AppConfig;
use nl2sql::{
    providers::{db::sqlite::SqliteProvider, factory::create_provider},
    QueryExecutor,
};
use std::{path::Path, sync::Arc};
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// The pipeline shared by every request.
    pub executor: Arc<QueryExecutor>,
}

/// Builds the shared application state from the configuration.
///
/// This function initializes all necessary services:
/// - It instantiates the AI provider client described by `provider`.
/// - It opens the business database, creating its tables when
///   `bootstrap_schema` is set.
/// - It opens the session database and ensures the history table exists.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let ai_provider = create_provider(&config.provider)?;

    let data_store = SqliteProvider::new(&config.db_url).await?;
    info!(db_path = %config.db_url, "Initialized business data store (SQLite).");
    if config.bootstrap_schema {
        data_store.initialize_business_schema().await?;
    }

    ensure_parent_dir(&config.session_db_url)?;
    let session_store = SqliteProvider::new(&config.session_db_url).await?;
    info!(db_path = %config.session_db_url, "Initialized session store (SQLite).");
    // Ensure the session schema is up-to-date on startup.
    session_store.initialize_schema().await?;

    let executor = QueryExecutor::new(
        ai_provider,
        Arc::new(data_store),
        Arc::new(session_store),
    )
    .with_max_history_turns(config.max_history_turns);

    Ok(AppState {
        config: Arc::new(config),
        executor: Arc::new(executor),
    })
}

/// Creates the directory a database file lives in, so `db/sessions.db` works
/// on a fresh checkout.
fn ensure_parent_dir(db_path: &str) -> anyhow::Result<()> {
    if db_path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
