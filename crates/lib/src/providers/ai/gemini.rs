use crate::{
    errors::PromptError,
    providers::ai::AiProvider,
    types::{ChatMessage, FunctionCall, Role, ToolCall, ToolDefinition},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::Debug;
use tracing::debug;

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GeminiTool<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<Value>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_call: Option<GeminiFunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_response: Option<GeminiFunctionResponse>,
}

#[derive(Serialize, Deserialize, Debug)]
struct GeminiFunctionCall {
    name: String,
    #[serde(default = "empty_args")]
    args: Value,
}

fn empty_args() -> Value {
    json!({})
}

#[derive(Serialize, Deserialize, Debug)]
struct GeminiFunctionResponse {
    name: String,
    response: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiTool<'a> {
    function_declarations: Vec<FunctionDeclaration<'a>>,
}

#[derive(Serialize)]
struct FunctionDeclaration<'a> {
    name: &'a str,
    description: &'a str,
    parameters: &'a Value,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Splits the conversation into Gemini's system instruction and content turns.
fn to_gemini_contents(
    messages: &[ChatMessage],
) -> Result<(Option<Content>, Vec<Content>), PromptError> {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();

    for message in messages {
        match message.role {
            Role::System => {
                if let Some(text) = &message.content {
                    system_parts.push(Part::text(text.clone()));
                }
            }
            Role::User => contents.push(Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(message.content.clone().unwrap_or_default())],
            }),
            Role::Assistant => {
                let mut parts = Vec::new();
                if let Some(text) = message.content.as_ref().filter(|t| !t.is_empty()) {
                    parts.push(Part::text(text.clone()));
                }
                for call in &message.tool_calls {
                    let args: Value = serde_json::from_str(&call.function.arguments)
                        .map_err(PromptError::ToolArguments)?;
                    parts.push(Part {
                        function_call: Some(GeminiFunctionCall {
                            name: call.function.name.clone(),
                            args,
                        }),
                        ..Default::default()
                    });
                }
                contents.push(Content {
                    role: Some("model".to_string()),
                    parts,
                });
            }
            Role::Tool => contents.push(Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    function_response: Some(GeminiFunctionResponse {
                        name: message.name.clone().unwrap_or_default(),
                        response: json!({ "result": message.content.clone().unwrap_or_default() }),
                    }),
                    ..Default::default()
                }],
            }),
        }
    }

    let system_instruction = (!system_parts.is_empty()).then(|| Content {
        role: None,
        parts: system_parts,
    });
    Ok((system_instruction, contents))
}

/// Folds the parts of a candidate back into a single assistant message.
fn from_gemini_content(content: Content) -> ChatMessage {
    let mut text = String::new();
    let mut tool_calls = Vec::new();

    for part in content.parts {
        if let Some(t) = part.text {
            text.push_str(&t);
        }
        if let Some(call) = part.function_call {
            tool_calls.push(ToolCall {
                id: format!("call_{}", tool_calls.len()),
                function: FunctionCall {
                    name: call.name,
                    arguments: call.args.to_string(),
                },
            });
        }
    }

    ChatMessage {
        role: Role::Assistant,
        content: (!text.is_empty() || tool_calls.is_empty()).then_some(text),
        tool_calls,
        tool_call_id: None,
        name: None,
    }
}

// --- Gemini Provider implementation ---

/// A provider for interacting with the Google Gemini API.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(api_url: String, api_key: String) -> Result<Self, PromptError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(PromptError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// The `generateContent` endpoint for a model.
    pub fn model_url(model_name: &str) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{model_name}:generateContent"
        )
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<ChatMessage, PromptError> {
        let (system_instruction, contents) = to_gemini_contents(messages)?;

        let gemini_tools = if tools.is_empty() {
            Vec::new()
        } else {
            vec![GeminiTool {
                function_declarations: tools
                    .iter()
                    .map(|tool| FunctionDeclaration {
                        name: &tool.name,
                        description: &tool.description,
                        parameters: &tool.parameters,
                    })
                    .collect(),
            }]
        };

        let request_body = GeminiRequest {
            system_instruction,
            contents,
            tools: gemini_tools,
            tool_config: (!tools.is_empty())
                .then(|| json!({ "functionCallingConfig": { "mode": "AUTO" } })),
            generation_config: GenerationConfig { temperature: 0.0 },
        };

        debug!(api_url = %self.api_url, messages = messages.len(), tools = tools.len(), "--> Sending Gemini request");

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(PromptError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PromptError::AiApi(error_text));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(PromptError::AiDeserialization)?;

        let content = gemini_response
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content)
            .ok_or_else(|| PromptError::AiApi("Response contained no candidates.".to_string()))?;

        Ok(from_gemini_content(content))
    }
}
