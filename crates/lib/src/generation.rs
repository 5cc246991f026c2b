//! # Query Generation
//!
//! Turns a natural-language question into SQL with a single model call. The
//! prompt embeds the retail schema and, when the session has earlier turns, a
//! transcript of the conversation so follow-up questions can be resolved.

use crate::{
    errors::PromptError,
    prompts::tasks::{
        QUERY_GENERATION_SYSTEM_PROMPT, QUERY_GENERATION_USER_PROMPT,
        QUERY_GENERATION_WITH_HISTORY_USER_PROMPT,
    },
    providers::ai::AiProvider,
    schema::SCHEMA_DESCRIPTION,
    types::ConversationTurn,
};
use tracing::{debug, info};

/// Renders the turns as a flat `User: …` / `AI: …` transcript.
pub fn render_history(history: &[ConversationTurn]) -> String {
    history
        .iter()
        .map(|turn| format!("User: {}\nAI: {}", turn.user, turn.ai))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the system and user prompts for a query generation call.
pub fn build_generation_prompts(
    natural_language_query: &str,
    history: &[ConversationTurn],
) -> (String, String) {
    let system_prompt = QUERY_GENERATION_SYSTEM_PROMPT.replace("{schema}", SCHEMA_DESCRIPTION);

    let user_prompt = if history.is_empty() {
        QUERY_GENERATION_USER_PROMPT.replace("{prompt}", natural_language_query)
    } else {
        QUERY_GENERATION_WITH_HISTORY_USER_PROMPT
            .replace("{history}", &render_history(history))
            .replace("{prompt}", natural_language_query)
    };

    (system_prompt, user_prompt)
}

/// Asks the model for SQL answering `natural_language_query`.
///
/// The trimmed response is returned as-is. It is not guaranteed to be SQL: for
/// write intents the model is instructed to answer with a refusal instead.
pub async fn generate_sql(
    ai_provider: &dyn AiProvider,
    natural_language_query: &str,
    history: &[ConversationTurn],
) -> Result<String, PromptError> {
    info!(
        history_turns = history.len(),
        "[generate_sql] received query: {:?}", natural_language_query
    );

    let (system_prompt, user_prompt) = build_generation_prompts(natural_language_query, history);

    debug!(system_prompt = %system_prompt, user_prompt = %user_prompt, "--> Sending prompts to AI Provider");

    let raw_response = ai_provider.generate(&system_prompt, &user_prompt).await?;

    debug!("<-- Query from AI: {}", &raw_response);

    Ok(raw_response.trim().to_string())
}
