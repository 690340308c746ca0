//! LLM request/response types
//!
//! These types model the Gemini generateContent API but are kept
//! provider-agnostic enough that another backend could implement
//! [`crate::llm::LlmClient`] against them.

use serde::{Deserialize, Serialize};

/// A completion request - everything needed for one model call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction for the whole conversation
    pub system_prompt: String,

    /// Full ordered message history
    pub messages: Vec<Message>,

    /// Tools the model may call this turn
    pub tools: Vec<ToolDefinition>,

    /// Max tokens for the response (from config)
    pub max_tokens: u32,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create a model message with text content
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create a user message with multiple content blocks
    ///
    /// Function responses travel back to the model in a user-role message.
    pub fn user_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Blocks(blocks),
        }
    }

    /// Create a model message with multiple content blocks
    pub fn model_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Model,
            content: MessageContent::Blocks(blocks),
        }
    }
}

/// Message role
///
/// The wire protocol only has two roles; tool results are user-role
/// messages carrying function-response parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// Message content - either plain text or structured blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl MessageContent {
    /// Get text content if this is a text message
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
            MessageContent::Blocks(_) => None,
        }
    }
}

/// A content block in a message
///
/// Function calls carry no call id; a response is matched to its call by
/// function name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(rename = "function_call")]
    FunctionCall { name: String, args: serde_json::Value },

    #[serde(rename = "function_response")]
    FunctionResponse {
        name: String,
        response: serde_json::Value,
    },
}

impl ContentBlock {
    /// Create a text content block
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    /// Create a function response block
    ///
    /// The response body is `{"result": ...}` on success and
    /// `{"error": ...}` on failure, so the model always sees a
    /// structured outcome.
    pub fn function_response(name: impl Into<String>, response: serde_json::Value) -> Self {
        ContentBlock::FunctionResponse {
            name: name.into(),
            response,
        }
    }
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text content from the first candidate (if any)
    pub content: Option<String>,

    /// Function calls requested by the model
    pub tool_calls: Vec<ToolCall>,

    /// Why the model stopped
    pub finish_reason: FinishReason,

    /// Number of candidates the service returned
    pub candidate_count: usize,

    /// Token usage for this turn
    pub usage: TokenUsage,
}

/// A tool call requested by the model
#[derive(Debug, Clone)]
pub struct ToolCall {
    pub name: String,
    pub args: serde_json::Value,
}

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

impl FinishReason {
    /// Parse from the API finishReason string
    pub fn from_gemini(s: &str) -> Self {
        match s {
            "STOP" => FinishReason::Stop,
            "MAX_TOKENS" => FinishReason::MaxTokens,
            "SAFETY" => FinishReason::Safety,
            _ => FinishReason::Other,
        }
    }
}

/// Token usage reported by the service
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub response_tokens: u64,
}

/// Tool definition surfaced to the model
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Convert to the API functionDeclaration format
    pub fn to_function_declaration(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters,
        })
    }
}
