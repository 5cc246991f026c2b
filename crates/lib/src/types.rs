//! # Shared Types
//!
//! Data structures passed between the query pipeline, the AI providers and the
//! storage providers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single result row, keyed by column name in the order the columns were
/// returned by the statement.
pub type Row = serde_json::Map<String, Value>;

/// One completed exchange within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user: String,
    pub ai: String,
}

impl ConversationTurn {
    pub fn new(user: impl Into<String>, ai: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ai: ai.into(),
        }
    }
}

// --- Chat Model ---

/// The author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A provider-agnostic chat message.
///
/// Assistant messages may carry tool invocations instead of (or alongside)
/// text. Tool messages answer a previous invocation and reference it through
/// `tool_call_id` and `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
            name: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::text(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::text(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::text(Role::Assistant, content)
    }

    /// An assistant message that only requests tool invocations.
    pub fn assistant_tool_calls(tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: Role::Assistant,
            content: None,
            tool_calls,
            tool_call_id: None,
            name: None,
        }
    }

    /// The answer to the tool invocation identified by `call`.
    pub fn tool_result(call: &ToolCall, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: Some(call.id.clone()),
            name: Some(call.function.name.clone()),
        }
    }
}

/// A tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub function: FunctionCall,
}

/// The function name and JSON-encoded arguments of a tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// A callable tool offered to the model, described by a JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

// --- Pipeline Results ---

/// The outcome of the combined generate-and-execute pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub sql: String,
    pub results: Vec<Row>,
}

/// The outcome of the pipeline that consults the existence oracle before
/// executing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckAndExecuteResponse {
    pub data_exists: Option<String>,
    pub sql: String,
    pub results: Vec<Row>,
}

// --- Configuration ---

/// Connection settings for the AI provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The type of provider ("openai", "local" or "gemini").
    pub provider: String,
    /// The API URL. Optional for providers where it can be derived.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key, which can be absent for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model_name: String,
}
