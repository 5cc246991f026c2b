pub mod gemini;
pub mod openai;

use crate::{
    errors::PromptError,
    types::{ChatMessage, ToolDefinition},
};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// Implementations send a conversation to a Large Language Model at temperature 0
/// and return the model's reply. When tools are offered, the reply may carry tool
/// invocations instead of text.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends `messages` to the model, declaring `tools` (if any) with automatic
    /// tool choice, and returns the assistant's message.
    async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<ChatMessage, PromptError>;

    /// Generates a plain-text response from a given system and user prompt.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PromptError> {
        let messages = [
            ChatMessage::system(system_prompt),
            ChatMessage::user(user_prompt),
        ];
        let reply = self.chat(&messages, &[]).await?;
        Ok(reply.content.unwrap_or_default().trim().to_string())
    }
}

dyn_clone::clone_trait_object!(AiProvider);
