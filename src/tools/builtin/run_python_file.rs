//! run_python_file tool - execute a Python script under a timeout

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolResult};

/// Default hard cap on script runtime
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Run a Python file inside the working directory
pub struct RunPythonFileTool {
    timeout: Duration,
}

impl RunPythonFileTool {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for RunPythonFileTool {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_SECS)
    }
}

#[async_trait]
impl Tool for RunPythonFileTool {
    fn name(&self) -> &'static str {
        "run_python_file"
    }

    fn description(&self) -> &'static str {
        "Run a specified Python file within the working directory and return its output."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The relative path to the Python file within the working directory to be executed."
                },
                "args": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "A list of string arguments to pass to the Python file when executing it."
                }
            },
            "required": ["file_path"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        let file_path = match input["file_path"].as_str() {
            Some(p) => p,
            None => return ToolResult::error("file_path is required"),
        };

        let args: Vec<String> = input["args"]
            .as_array()
            .map(|a| a.iter().filter_map(|v| v.as_str().map(String::from)).collect())
            .unwrap_or_default();

        let full_path = match ctx.validate_path(Path::new(file_path)) {
            Ok(p) => p,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        if !full_path.is_file() {
            return ToolResult::error(format!("File \"{}\" not found.", file_path));
        }

        if full_path.extension().and_then(|e| e.to_str()) != Some("py") {
            return ToolResult::error(format!("\"{}\" is not a Python file.", file_path));
        }

        debug!(?full_path, ?args, "RunPythonFileTool::execute: spawning");
        let output = match tokio::time::timeout(
            self.timeout,
            tokio::process::Command::new("python3")
                .arg(&full_path)
                .args(&args)
                .current_dir(&ctx.working_dir)
                .output(),
        )
        .await
        {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return ToolResult::error(format!("Failed to execute Python file: {}", e)),
            Err(_) => {
                return ToolResult::error(format!(
                    "Python file timed out after {} seconds",
                    self.timeout.as_secs()
                ));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        let mut sections = Vec::new();
        if !stdout.is_empty() {
            sections.push(format!("Code executed successfully\nSTDOUT:\n{}", stdout));
        }
        if !stderr.is_empty() {
            sections.push(format!("STDERR:\n{}", stderr));
        }
        // A nonzero exit code is reported but is not an error by itself -
        // the captured output is the payload either way.
        if !output.status.success() {
            sections.push(format!("Process exited with code {}", output.status.code().unwrap_or(-1)));
        }

        if sections.is_empty() {
            return ToolResult::success("No output produced.");
        }

        ToolResult::success(sections.join("\n"))
    }
}
