//! miniagent - a sandboxed tool-calling CLI agent
//!
//! One prompt in, a bounded tool-calling conversation with a remote model,
//! one answer out. The model can list, read, write and run files inside a
//! sandboxed working directory, look up the current temperature for a city,
//! and evaluate arithmetic expressions.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and Gemini implementation
//! - [`tools`] - Tool system: sandbox context, registry, built-in tools
//! - [`agent`] - Conversation loop engine
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod agent;
pub mod cli;
pub mod config;
pub mod llm;
pub mod prompts;
pub mod tools;

// Re-export commonly used types
pub use agent::Agent;
pub use config::{AgentConfig, Config, LlmConfig};
pub use llm::{CompletionRequest, CompletionResponse, GeminiClient, LlmClient, LlmError};
pub use tools::{Tool, ToolContext, ToolError, ToolExecutor, ToolResult};
