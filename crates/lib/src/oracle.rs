//! # Existence Oracle
//!
//! A fixed two-round conversation in which the model may call the existence
//! probe as a tool before giving its verdict:
//!
//! 1. **Offer**: the SQL is sent with the `check_data_exists` tool declared.
//! 2. **Resolve**: if the model invoked the tool, the probe runs locally, its
//!    boolean result is sent back, and the model's second answer is the verdict.
//!
//! Only the first tool invocation is honored.

use crate::{
    errors::PromptError,
    probe::probe_exists,
    prompts::tasks::{EXISTENCE_CHECK_USER_PROMPT, EXISTENCE_TOOL_DESCRIPTION, EXISTENCE_TOOL_NAME},
    providers::{ai::AiProvider, db::storage::Storage},
    types::{ChatMessage, ToolDefinition},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

/// The arguments the model passes to `check_data_exists`.
#[derive(Debug, Deserialize)]
struct ExistenceToolArgs {
    sql_query: String,
}

/// The declaration of the existence probe offered to the model.
pub fn existence_tool() -> ToolDefinition {
    ToolDefinition {
        name: EXISTENCE_TOOL_NAME.to_string(),
        description: EXISTENCE_TOOL_DESCRIPTION.to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "sql_query": {
                    "type": "string",
                    "description": "The SQL query to check for existing data."
                }
            },
            "required": ["sql_query"]
        }),
    }
}

/// Asks the model whether `sql` would return data.
///
/// Returns `Ok(None)` when the model answers without invoking the tool, and the
/// model's final text otherwise.
pub async fn check_data_existence(
    ai_provider: &dyn AiProvider,
    storage: &dyn Storage,
    sql: &str,
) -> Result<Option<String>, PromptError> {
    info!("[check_data_existence] checking: {:?}", sql);

    let tools = [existence_tool()];
    let mut messages = vec![ChatMessage::user(
        EXISTENCE_CHECK_USER_PROMPT.replace("{sql}", sql),
    )];

    // --- Offer ---
    let first_reply = ai_provider.chat(&messages, &tools).await?;

    let Some(call) = first_reply.tool_calls.first().cloned() else {
        debug!("Model answered without invoking the existence tool.");
        return Ok(None);
    };
    if first_reply.tool_calls.len() > 1 {
        warn!(
            "Model requested {} tool calls; only the first is honored.",
            first_reply.tool_calls.len()
        );
    }

    let args: ExistenceToolArgs =
        serde_json::from_str(&call.function.arguments).map_err(PromptError::ToolArguments)?;
    let exists = probe_exists(storage, &args.sql_query).await;
    info!(exists, "Existence tool returned.");

    // --- Resolve ---
    messages.push(ChatMessage::assistant_tool_calls(vec![call.clone()]));
    messages.push(ChatMessage::tool_result(&call, exists.to_string()));

    let verdict = ai_provider.chat(&messages, &tools).await?;
    debug!("<-- Existence verdict: {:?}", verdict.content);

    Ok(Some(verdict.content.unwrap_or_default()))
}
