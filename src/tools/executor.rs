//! ToolExecutor - the name-to-implementation registry
//!
//! Built once at startup and passed by reference into the conversation
//! loop; there is no process-global tool state.

use std::collections::HashMap;

use crate::config::AgentConfig;
use crate::llm::{ToolCall, ToolDefinition};

use super::builtin::{
    EvaluateMathExpressionTool, GetCurrentTemperatureTool, GetFileContentTool, GetFilesInfoTool, RunPythonFileTool,
    WriteFileTool,
};
use super::{Tool, ToolContext, ToolResult};

/// Manages tool dispatch for an agent run
pub struct ToolExecutor {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create executor with the standard tool set
    pub fn standard(config: &AgentConfig) -> Self {
        let mut executor = Self::empty();

        executor.add_tool(Box::new(GetFilesInfoTool));
        executor.add_tool(Box::new(GetFileContentTool::new(config.max_file_chars)));
        executor.add_tool(Box::new(WriteFileTool));
        executor.add_tool(Box::new(RunPythonFileTool::new(config.script_timeout_secs)));
        executor.add_tool(Box::new(GetCurrentTemperatureTool));
        executor.add_tool(Box::new(EvaluateMathExpressionTool));

        executor
    }

    /// Create an empty executor (for testing)
    pub fn empty() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Add a tool to the executor
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get tool definitions for the model
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|t| ToolDefinition::new(t.name(), t.description(), t.input_schema()))
            .collect()
    }

    /// Execute a tool call
    ///
    /// An unknown tool name is an error result fed back to the model,
    /// never a fatal fault.
    pub async fn execute(&self, tool_call: &ToolCall, ctx: &ToolContext) -> ToolResult {
        match self.tools.get(&tool_call.name) {
            Some(tool) => tool.execute(tool_call.args.clone(), ctx).await,
            None => ToolResult::error(format!("Unknown function: {}", tool_call.name)),
        }
    }

    /// Execute multiple tool calls sequentially, in the order received
    pub async fn execute_all(&self, tool_calls: &[ToolCall], ctx: &ToolContext) -> Vec<(String, ToolResult)> {
        let mut results = Vec::with_capacity(tool_calls.len());

        for call in tool_calls {
            let result = self.execute(call, ctx).await;
            results.push((call.name.clone(), result));
        }

        results
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}
