//! Agent - drives the tool-calling conversation loop
//!
//! Each turn sends the full message history plus tool schemas to the
//! model. Function calls are dispatched sequentially through the
//! registry; their results travel back as one combined message. The loop
//! ends with the model's first plain-text answer, or fatally when the
//! iteration cap is hit.

use std::sync::Arc;

use eyre::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::llm::{CompletionRequest, CompletionResponse, ContentBlock, LlmClient, Message, ToolCall};
use crate::prompts::SYSTEM_PROMPT;
use crate::tools::{ToolContext, ToolExecutor, ToolResult};

/// The conversation loop
pub struct Agent {
    llm: Arc<dyn LlmClient>,
    tools: ToolExecutor,
    ctx: ToolContext,
    system_prompt: String,
    max_iterations: u32,
    max_tokens: u32,
    verbose: bool,

    /// Append-only message history, owned by the loop for its lifetime
    messages: Vec<Message>,
}

impl Agent {
    /// Create a new agent
    pub fn new(llm: Arc<dyn LlmClient>, tools: ToolExecutor, ctx: ToolContext, config: &Config) -> Self {
        Self {
            llm,
            tools,
            ctx,
            system_prompt: SYSTEM_PROMPT.to_string(),
            max_iterations: config.agent.max_iterations,
            max_tokens: config.llm.max_tokens,
            verbose: false,
            messages: Vec::new(),
        }
    }

    /// Enable verbose output (token counts, tool arguments, tool results)
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Message history so far
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Run the loop on a user prompt until the model produces a final
    /// text answer
    ///
    /// Exceeding the iteration cap is a fatal error that aborts the run.
    pub async fn run(&mut self, prompt: &str) -> Result<String> {
        info!(working_dir = %self.ctx.working_dir.display(), "starting agent run");
        self.messages.push(Message::user(prompt));

        let tool_defs = self.tools.definitions();
        let mut iterations = 0u32;

        loop {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(eyre::eyre!("Reached maximum iterations ({}). Stopping.", self.max_iterations));
            }
            debug!(iteration = iterations, "conversation turn");

            let request = CompletionRequest {
                system_prompt: self.system_prompt.clone(),
                messages: self.messages.clone(),
                tools: tool_defs.clone(),
                max_tokens: self.max_tokens,
            };

            let response = self.llm.complete(request).await?;

            if self.verbose {
                println!("Prompt tokens: {}", response.usage.prompt_tokens);
                println!("Response tokens: {}", response.usage.response_tokens);
            }
            println!("Response received with {} candidate(s).", response.candidate_count);

            self.messages.push(build_model_message(&response));

            if response.tool_calls.is_empty() {
                match response.content {
                    Some(text) if !text.is_empty() => return Ok(text),
                    // Neither text nor calls: let the model try again.
                    // The turn still counts toward the cap.
                    _ => continue,
                }
            }

            let results = self.dispatch_tools(&response.tool_calls).await;
            self.messages.push(build_tool_result_message(&results));
        }
    }

    /// Execute tool calls sequentially, in the order received
    async fn dispatch_tools(&self, tool_calls: &[ToolCall]) -> Vec<(String, ToolResult)> {
        let mut results = Vec::with_capacity(tool_calls.len());

        for call in tool_calls {
            if self.verbose {
                println!(" - Calling function: {} with args: {}", call.name, call.args);
            } else {
                println!(" - Calling function: {}", call.name);
            }

            let result = self.tools.execute(call, &self.ctx).await;

            if self.verbose {
                println!("  -> {}", result.content);
            }

            results.push((call.name.clone(), result));
        }

        results
    }
}

/// Build the model-role history entry from a response
fn build_model_message(response: &CompletionResponse) -> Message {
    let mut blocks = Vec::new();

    if let Some(text) = &response.content {
        blocks.push(ContentBlock::text(text));
    }

    for call in &response.tool_calls {
        blocks.push(ContentBlock::FunctionCall {
            name: call.name.clone(),
            args: call.args.clone(),
        });
    }

    Message::model_blocks(blocks)
}

/// Wrap tool results into one combined function-response message
fn build_tool_result_message(results: &[(String, ToolResult)]) -> Message {
    let blocks: Vec<ContentBlock> = results
        .iter()
        .map(|(name, result)| {
            let body = if result.is_error {
                serde_json::json!({ "error": result.content })
            } else {
                serde_json::json!({ "result": result.content })
            };
            ContentBlock::function_response(name, body)
        })
        .collect();

    Message::user_blocks(blocks)
}
