//! get_files_info tool - list directory entries with sizes

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::tools::{Tool, ToolContext, ToolResult};

/// List files in a directory along with their sizes
pub struct GetFilesInfoTool;

#[async_trait]
impl Tool for GetFilesInfoTool {
    fn name(&self) -> &'static str {
        "get_files_info"
    }

    fn description(&self) -> &'static str {
        "Lists files in the specified directory along with their sizes, constrained to the working directory."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "directory": {
                    "type": "string",
                    "description": "The directory to list files from, relative to the working directory. If not provided, lists files in the working directory itself."
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> ToolResult {
        let directory = input["directory"].as_str().unwrap_or(".");
        debug!(%directory, "GetFilesInfoTool::execute: called");

        let full_path = match ctx.validate_path(Path::new(directory)) {
            Ok(p) => p,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        match tokio::fs::metadata(&full_path).await {
            Ok(m) if m.is_dir() => {}
            _ => return ToolResult::error(format!("\"{}\" is not a directory", directory)),
        }

        let mut dir = match tokio::fs::read_dir(&full_path).await {
            Ok(d) => d,
            Err(e) => return ToolResult::error(format!("Failed to read directory: {}", e)),
        };

        // Entries stay in enumeration order; one unreadable entry does not
        // abort the listing.
        let mut entries = Vec::new();
        while let Ok(Some(entry)) = dir.next_entry().await {
            let name = entry.file_name().to_string_lossy().to_string();
            match entry.metadata().await {
                Ok(metadata) => {
                    entries.push(format!(
                        "{}: file_size={} bytes, is_dir={}",
                        name,
                        metadata.len(),
                        metadata.is_dir()
                    ));
                }
                Err(e) => {
                    entries.push(format!("Error: Could not access \"{}\": {}", name, e));
                }
            }
        }

        if entries.is_empty() {
            ToolResult::success("(empty directory)")
        } else {
            ToolResult::success(entries.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_list_working_directory() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("file1.txt"), "hello").unwrap();
        fs::create_dir(temp.path().join("subdir")).unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFilesInfoTool;

        let result = tool.execute(serde_json::json!({}), &ctx).await;

        assert!(!result.is_error);
        assert!(result.content.contains("file1.txt: file_size=5 bytes, is_dir=false"));
        assert!(result.content.contains("subdir: "));
        assert!(result.content.contains("is_dir=true"));
    }

    #[tokio::test]
    async fn test_each_entry_listed_once() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFilesInfoTool;

        let result = tool.execute(serde_json::json!({}), &ctx).await;

        assert_eq!(result.content.lines().count(), 2);
        assert_eq!(result.content.matches("a.txt").count(), 1);
        assert_eq!(result.content.matches("b.txt").count(), 1);
    }

    #[tokio::test]
    async fn test_list_subdirectory() {
        let temp = tempdir().unwrap();
        let subdir = temp.path().join("subdir");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("nested.txt"), "").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFilesInfoTool;

        let result = tool.execute(serde_json::json!({"directory": "subdir"}), &ctx).await;

        assert!(!result.is_error);
        assert!(result.content.contains("nested.txt"));
    }

    #[tokio::test]
    async fn test_list_outside_working_directory() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFilesInfoTool;

        let result = tool.execute(serde_json::json!({"directory": "../"}), &ctx).await;

        assert!(result.is_error);
        assert!(result.content.contains("outside the permitted working directory"));
    }

    #[tokio::test]
    async fn test_list_file_is_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("plain.txt"), "").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFilesInfoTool;

        let result = tool.execute(serde_json::json!({"directory": "plain.txt"}), &ctx).await;

        assert!(result.is_error);
        assert!(result.content.contains("is not a directory"));
    }

    #[tokio::test]
    async fn test_list_nonexistent_directory() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFilesInfoTool;

        let result = tool.execute(serde_json::json!({"directory": "missing"}), &ctx).await;

        assert!(result.is_error);
        assert!(result.content.contains("is not a directory"));
    }

    #[tokio::test]
    async fn test_list_empty_directory() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        let tool = GetFilesInfoTool;

        let result = tool.execute(serde_json::json!({}), &ctx).await;

        assert!(!result.is_error);
        assert!(result.content.contains("empty"));
    }
}
