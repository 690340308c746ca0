//! get_file_content tool - read a file's full contents

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

use crate::tools::{Tool, ToolContext, ToolResult};

/// Default cap on returned characters
const DEFAULT_MAX_CHARS: usize = 10_000;

/// Read a file's contents, truncated at a configured character count
pub struct GetFileContentTool {
    max_chars: usize,
}

impl GetFileContentTool {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl Default for GetFileContentTool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHARS)
    }
}

#[async_trait]
impl Tool for GetFileContentTool {
    fn name(&self) -> &'static str {
        "get_file_content"
    }

    fn description(&self) -> &'static str {
        "Get the content of a specified file within the working directory."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The relative path to the file within the working directory whose content is to be retrieved."
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

        let full_path = match ctx.validate_path(Path::new(file_path)) {
            Ok(p) => p,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        if !full_path.is_file() {
            return ToolResult::error(format!("File not found or is not a regular file: \"{}\"", file_path));
        }

        let content = match tokio::fs::read_to_string(&full_path).await {
            Ok(c) => c,
            Err(e) => return ToolResult::error(format!("Failed to read file: {}", e)),
        };

        if content.chars().count() > self.max_chars {
            let truncated: String = content.chars().take(self.max_chars).collect();
            return ToolResult::success(format!(
                "{}\n[...File \"{}\" truncated at {} characters]",
                truncated, file_path, self.max_chars
            ));
        }

        ToolResult::success(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_file_basic() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("test.txt"), "line 1\nline 2").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFileContentTool::default();

        let result = tool.execute(serde_json::json!({"file_path": "test.txt"}), &ctx).await;

        assert!(!result.is_error);
        assert_eq!(result.content, "line 1\nline 2");
    }

    #[tokio::test]
    async fn test_read_empty_file() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("empty.txt"), "").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFileContentTool::default();

        let result = tool.execute(serde_json::json!({"file_path": "empty.txt"}), &ctx).await;

        assert!(!result.is_error);
        assert_eq!(result.content, "");
    }

    #[tokio::test]
    async fn test_read_file_truncated() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("long.txt"), "x".repeat(50)).unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFileContentTool::new(10);

        let result = tool.execute(serde_json::json!({"file_path": "long.txt"}), &ctx).await;

        assert!(!result.is_error);
        assert!(result.content.starts_with(&"x".repeat(10)));
        assert!(result.content.contains("[...File \"long.txt\" truncated at 10 characters]"));
        assert!(!result.content.contains(&"x".repeat(11)));
    }

    #[tokio::test]
    async fn test_read_file_at_exact_limit_not_truncated() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("exact.txt"), "x".repeat(10)).unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFileContentTool::new(10);

        let result = tool.execute(serde_json::json!({"file_path": "exact.txt"}), &ctx).await;

        assert_eq!(result.content, "x".repeat(10));
    }

    #[tokio::test]
    async fn test_read_file_outside_working_directory() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFileContentTool::default();

        let result = tool
            .execute(serde_json::json!({"file_path": "../outside.txt"}), &ctx)
            .await;

        assert!(result.is_error);
        assert!(result.content.contains("outside the permitted working directory"));
    }

    #[tokio::test]
    async fn test_read_nonexistent_file() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFileContentTool::default();

        let result = tool
            .execute(serde_json::json!({"file_path": "does_not_exist.txt"}), &ctx)
            .await;

        assert!(result.is_error);
        assert!(result.content.contains("File not found or is not a regular file"));
    }

    #[tokio::test]
    async fn test_read_directory_is_error() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFileContentTool::default();

        let result = tool.execute(serde_json::json!({"file_path": "."}), &ctx).await;

        assert!(result.is_error);
        assert!(result.content.contains("File not found or is not a regular file"));
    }

    #[tokio::test]
    async fn test_read_missing_file_path_param() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFileContentTool::default();

        let result = tool.execute(serde_json::json!({}), &ctx).await;

        assert!(result.is_error);
        assert!(result.content.contains("file_path is required"));
    }
}
