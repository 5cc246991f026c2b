//! # AI Provider Factory
//!
//! This module centralizes the logic for creating AI provider instances from
//! configuration, so the server and tests build providers the same way.

use crate::{
    errors::PromptError,
    providers::ai::{
        gemini::GeminiProvider,
        openai::{OpenAiProvider, OPENAI_CHAT_COMPLETIONS_URL},
        AiProvider,
    },
    types::ProviderConfig,
};
use tracing::info;

/// Creates an AI provider instance from its configuration.
///
/// - `openai`: the URL defaults to the public chat completions endpoint.
/// - `local`: any OpenAI-compatible server; the URL is required.
/// - `gemini`: the URL is derived from the model name when absent; the key is required.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "openai" => {
            let api_url = non_empty(&config.api_url)
                .unwrap_or_else(|| OPENAI_CHAT_COMPLETIONS_URL.to_string());
            info!("Configuring OpenAI provider with URL: {}", api_url);
            Box::new(OpenAiProvider::new(
                api_url,
                non_empty(&config.api_key),
                Some(config.model_name.clone()),
            )?)
        }
        "local" => {
            let api_url = non_empty(&config.api_url).ok_or_else(|| {
                PromptError::MissingAiProvider(
                    "api_url is required for the local provider. Please set LOCAL_AI_API_URL in your .env file."
                        .to_string(),
                )
            })?;
            info!("Configuring Local AI provider with URL: {}", api_url);
            Box::new(OpenAiProvider::new(
                api_url,
                non_empty(&config.api_key),
                Some(config.model_name.clone()),
            )?)
        }
        "gemini" => {
            let api_key = non_empty(&config.api_key).ok_or_else(|| {
                PromptError::MissingAiProvider(
                    "api_key is required for the gemini provider.".to_string(),
                )
            })?;
            let api_url = non_empty(&config.api_url)
                .unwrap_or_else(|| GeminiProvider::model_url(&config.model_name));
            info!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        other => {
            return Err(PromptError::MissingAiProvider(format!(
                "Unsupported AI provider type '{other}'."
            )))
        }
    };

    Ok(provider)
}

/// Substituted `${VAR}` references to unset variables come through as empty strings.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
