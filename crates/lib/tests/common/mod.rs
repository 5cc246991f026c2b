#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as scripted AI
//! providers, a recording storage provider and a seeded retail database, to
//! ensure tests are isolated and repeatable.

use async_trait::async_trait;
use dotenvy::dotenv;
use nl2sql::{
    providers::{
        ai::AiProvider,
        db::{sqlite::SqliteProvider, storage::Storage},
    },
    types::{ChatMessage, FunctionCall, Row, ToolCall, ToolDefinition},
    PromptError,
};
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---

/// One recorded `chat` call: the messages sent and the tools offered.
pub type ChatCall = (Vec<ChatMessage>, Vec<ToolDefinition>);

/// Replies with scripted messages, in order, and records every call.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<ChatCall>>>,
    pub responses: Arc<RwLock<Vec<ChatMessage>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<ChatMessage>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    /// A provider whose replies are plain assistant text.
    pub fn with_text(responses: &[&str]) -> Self {
        Self::new(
            responses
                .iter()
                .map(|text| ChatMessage::assistant(*text))
                .collect(),
        )
    }

    pub fn calls(&self) -> Vec<ChatCall> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<ChatMessage, PromptError> {
        self.call_history
            .write()
            .unwrap()
            .push((messages.to_vec(), tools.to_vec()));

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Ok(ChatMessage::assistant("Default mock response"))
        }
    }
}

/// An assistant message invoking `check_data_exists` with raw `arguments`.
pub fn existence_tool_call(arguments: &str) -> ChatMessage {
    ChatMessage::assistant_tool_calls(vec![ToolCall {
        id: "call_abc123".to_string(),
        function: FunctionCall {
            name: "check_data_exists".to_string(),
            arguments: arguments.to_string(),
        },
    }])
}

// --- Recording Storage Provider ---

/// Records every query it receives and answers with fixed rows.
#[derive(Clone, Debug, Default)]
pub struct RecordingStorage {
    pub queries: Arc<RwLock<Vec<String>>>,
    pub rows: Vec<Row>,
    pub fail: bool,
}

impl RecordingStorage {
    pub fn returning(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.read().unwrap().clone()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    fn name(&self) -> &str {
        "RecordingDB"
    }

    async fn execute_query(&self, query: &str) -> Result<Vec<Row>, PromptError> {
        self.queries.write().unwrap().push(query.to_string());
        if self.fail {
            return Err(PromptError::StorageOperationFailed(
                "no such table: Missing".to_string(),
            ));
        }
        Ok(self.rows.clone())
    }
}

/// Builds a row from a JSON object literal.
pub fn row(value: serde_json::Value) -> Row {
    value.as_object().cloned().expect("row literal must be an object")
}

// --- Seeded Retail Database ---

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

/// An in-memory database holding the retail tables and a small data set.
pub async fn retail_store() -> SqliteProvider {
    let provider = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create SqliteProvider");
    provider
        .initialize_business_schema()
        .await
        .expect("Failed to create business tables");
    provider
        .initialize_with_data(RETAIL_SEED_SQL)
        .await
        .expect("Failed to seed retail data");
    provider
}

/// An in-memory database holding only the session history table.
pub async fn session_store() -> SqliteProvider {
    let provider = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create SqliteProvider");
    provider
        .initialize_schema()
        .await
        .expect("Failed to create session tables");
    provider
}
