//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `nl2sql-server`
//! integration tests. `TestApp` spawns a real server on a random port, backed
//! by temporary SQLite files and an AI provider pointed at an
//! `httpmock::MockServer` speaking the OpenAI chat completions format.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use nl2sql::providers::db::sqlite::SqliteProvider;
use nl2sql_server::{
    config, router,
    state::{build_app_state, AppState},
};
use reqwest::Client;
use serde_json::{json, Value};
use std::{fs::File, io::Write, net::SocketAddr, path::PathBuf};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// Rows shared by the end-to-end tests: two stores in NY, one in IL, one in TX,
/// three products and two transactions.
pub const RETAIL_SEED_SQL: &str = "
    INSERT INTO Stores (StoreID, State, ZipCode) VALUES (1, 'NY', '10001');
    INSERT INTO Stores (StoreID, State, ZipCode) VALUES (2, 'NY', '10002');
    INSERT INTO Stores (StoreID, State, ZipCode) VALUES (3, 'IL', '60601');
    INSERT INTO Stores (StoreID, State, ZipCode) VALUES (4, 'TX', '73301');
    INSERT INTO Products (ProductID, Name, Category1, Category2) VALUES (1, 'Runner', 'Men', 'Sports Shoes');
    INSERT INTO Products (ProductID, Name, Category1, Category2) VALUES (2, 'Breeze', 'Women', 'Sandals');
    INSERT INTO Products (ProductID, Name, Category1, Category2) VALUES (3, 'Trail', 'Kids', 'Boots');
    INSERT INTO Transactions (StoreID, ProductID, Quantity, PricePerQuantity, Timestamp) VALUES (1, 1, 2, 59.5, '2024-01-05 10:00:00');
    INSERT INTO Transactions (StoreID, ProductID, Quantity, PricePerQuantity, Timestamp) VALUES (3, 2, 1, 24.5, '2024-02-10 12:30:00');
";

// --- Full Application Test Harness ---

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub db_path: PathBuf,
    pub session_db_path: PathBuf,
    pub app_state: AppState,
    _data_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server with the retail tables seeded.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(Some(RETAIL_SEED_SQL), None).await
    }

    /// Spawns the application server, optionally seeding the business
    /// database and bounding the history threaded into prompts.
    pub async fn spawn_with(
        seed_sql: Option<&str>,
        max_history_turns: Option<usize>,
    ) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let data_dir = tempdir()?;
        let db_path = data_dir.path().join("data.db");
        let session_db_path = data_dir.path().join("db").join("sessions.db");

        {
            let seeder = SqliteProvider::new(db_path.to_str().unwrap()).await?;
            seeder.initialize_business_schema().await?;
            if let Some(seed_sql) = seed_sql {
                seeder.initialize_with_data(seed_sql).await?;
            }
        }

        let config_path = data_dir.path().join("config.yml");
        let max_history_line = max_history_turns
            .map(|n| format!("max_history_turns: {n}\n"))
            .unwrap_or_default();
        let config_content = format!(
            r#"
port: 0
db_url: "{}"
session_db_url: "{}"
bootstrap_schema: true
{}provider:
  provider: "local"
  api_url: "{}"
  api_key: null
  model_name: "mock-chat-model"
"#,
            db_path.to_str().unwrap(),
            session_db_path.to_str().unwrap(),
            max_history_line,
            mock_server.url("/v1/chat/completions")
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config).await?;
        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            db_path,
            session_db_path,
            app_state: app_state_for_harness,
            _data_dir: data_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// POSTs a JSON body to `path` and returns the raw response.
    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Mints a session through the API.
    pub async fn new_session(&self) -> String {
        let body: Value = self
            .client
            .post(format!("{}/new-session", self.address))
            .send()
            .await
            .expect("Failed to execute request to /new-session")
            .json()
            .await
            .expect("Failed to parse /new-session response");
        body["session_id"]
            .as_str()
            .expect("session_id is not a string")
            .to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

// --- Mock Model Replies ---

/// An OpenAI-style reply carrying plain text.
pub fn chat_text_reply(content: &str) -> Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

/// An OpenAI-style reply invoking `check_data_exists` for `sql`.
pub fn chat_tool_reply(sql: &str) -> Value {
    json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {
                        "name": "check_data_exists",
                        "arguments": json!({ "sql_query": sql }).to_string()
                    }
                }]
            }
        }]
    })
}
