//! evaluate_math_expression tool - restricted arithmetic evaluation

use async_trait::async_trait;
use serde_json::Value;

use crate::tools::expr;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Evaluate a mathematical expression with a fixed function table
pub struct EvaluateMathExpressionTool;

#[async_trait]
impl Tool for EvaluateMathExpressionTool {
    fn name(&self) -> &'static str {
        "evaluate_math_expression"
    }

    fn description(&self) -> &'static str {
        "Evaluate a mathematical expression using standard arithmetic and math functions."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "The mathematical expression to evaluate. It can include numbers, operators (+, -, *, /), parentheses, and math functions (e.g., sin, cos, sqrt)."
                }
            },
            "required": ["expression"]
        })
    }

    async fn execute(&self, input: Value, _ctx: &ToolContext) -> ToolResult {
        let expression = match input["expression"].as_str() {
            Some(e) => e,
            None => return ToolResult::error("expression is required"),
        };

        match expr::eval(expression) {
            Ok(value) => ToolResult::success(expr::format_number(value)),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn eval_tool(expression: &str) -> ToolResult {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());
        EvaluateMathExpressionTool
            .execute(serde_json::json!({"expression": expression}), &ctx)
            .await
    }

    #[tokio::test]
    async fn test_valid_arithmetic() {
        let result = eval_tool("2 + 2").await;
        assert!(!result.is_error);
        assert_eq!(result.content, "4");

        let result = eval_tool("(2 + 3) * 4").await;
        assert!(!result.is_error);
        assert_eq!(result.content, "20");
    }

    #[tokio::test]
    async fn test_math_functions() {
        let result = eval_tool("sqrt(16)").await;
        assert_eq!(result.content, "4");

        let result = eval_tool("sin(0)").await;
        assert_eq!(result.content, "0");
    }

    #[tokio::test]
    async fn test_division_by_zero_is_error() {
        let result = eval_tool("1 / 0").await;
        assert!(result.is_error);
        assert!(result.content.contains("division by zero"));
    }

    #[tokio::test]
    async fn test_invalid_syntax_is_error() {
        let result = eval_tool("2 +").await;
        assert!(result.is_error);
    }

    #[tokio::test]
    async fn test_unsafe_code_is_error() {
        let result = eval_tool("__import__('os').system('echo hi')").await;
        assert!(result.is_error);
    }

    #[tokio::test]
    async fn test_missing_expression_param() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = EvaluateMathExpressionTool.execute(serde_json::json!({}), &ctx).await;

        assert!(result.is_error);
        assert!(result.content.contains("expression is required"));
    }
}
