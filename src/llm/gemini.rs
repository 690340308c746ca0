//! Gemini API client implementation
//!
//! Implements the LlmClient trait for the generateContent endpoint.
//! One request per conversation turn; no retries and no streaming.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{
    CompletionRequest, CompletionResponse, ContentBlock, FinishReason, LlmClient, LlmError, Message, MessageContent,
    TokenUsage, ToolCall,
};
use crate::config::LlmConfig;

/// Gemini API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body for the generateContent endpoint
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");
        let mut body = serde_json::json!({
            "system_instruction": {
                "parts": [{ "text": request.system_prompt }],
            },
            "contents": self.convert_messages(&request.messages),
            "generation_config": {
                "max_output_tokens": request.max_tokens.min(self.max_tokens),
            },
        });

        if !request.tools.is_empty() {
            body["tools"] = serde_json::json!([{
                "function_declarations": request
                    .tools
                    .iter()
                    .map(|t| t.to_function_declaration())
                    .collect::<Vec<_>>(),
            }]);
        }

        body
    }

    /// Convert internal Message types to API contents
    fn convert_messages(&self, messages: &[Message]) -> Vec<serde_json::Value> {
        messages
            .iter()
            .map(|msg| {
                let parts = match &msg.content {
                    MessageContent::Text(text) => {
                        vec![serde_json::json!({ "text": text })]
                    }
                    MessageContent::Blocks(blocks) => blocks.iter().map(|b| self.convert_part(b)).collect(),
                };

                serde_json::json!({
                    "role": msg.role,
                    "parts": parts,
                })
            })
            .collect()
    }

    /// Convert a ContentBlock to an API part
    fn convert_part(&self, block: &ContentBlock) -> serde_json::Value {
        match block {
            ContentBlock::Text { text } => serde_json::json!({ "text": text }),
            ContentBlock::FunctionCall { name, args } => serde_json::json!({
                "functionCall": { "name": name, "args": args },
            }),
            ContentBlock::FunctionResponse { name, response } => serde_json::json!({
                "functionResponse": { "name": name, "response": response },
            }),
        }
    }

    /// Parse the API response into a CompletionResponse
    fn parse_response(&self, api_response: GeminiResponse) -> Result<CompletionResponse, LlmError> {
        let candidate_count = api_response.candidates.len();
        debug!(%candidate_count, "parse_response: called");

        let candidate = api_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("response contained no candidates".to_string()))?;

        let mut content = String::new();
        let mut tool_calls = Vec::new();

        if let Some(parts) = candidate.content.map(|c| c.parts) {
            for part in parts {
                if let Some(text) = part.text {
                    content.push_str(&text);
                }
                if let Some(call) = part.function_call {
                    debug!(name = %call.name, "parse_response: function call part");
                    tool_calls.push(ToolCall {
                        name: call.name,
                        args: call.args,
                    });
                }
            }
        }

        let usage = api_response
            .usage_metadata
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                response_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: if content.is_empty() { None } else { Some(content) },
            tool_calls,
            finish_reason: candidate
                .finish_reason
                .as_deref()
                .map(FinishReason::from_gemini)
                .unwrap_or(FinishReason::Other),
            candidate_count,
            usage,
        })
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let body = self.build_request_body(&request);

        debug!(%url, message_count = request.messages.len(), "complete: sending request");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "complete: API error");
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let api_response: GeminiResponse = response.json().await?;
        self.parse_response(api_response)
    }
}

// Gemini API response types

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,

    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,

    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,

    #[serde(rename = "functionCall")]
    function_call: Option<GeminiFunctionCall>,
}

#[derive(Debug, Deserialize)]
struct GeminiFunctionCall {
    name: String,

    #[serde(default)]
    args: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiUsage {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u64,

    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u64,
}
