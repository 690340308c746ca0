//! Tool error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during tool execution
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Cannot access \"{path}\" as it is outside the permitted working directory")]
    SandboxViolation { path: PathBuf, working_dir: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_violation_message() {
        let err = ToolError::SandboxViolation {
            path: PathBuf::from("../secrets.txt"),
            working_dir: PathBuf::from("/tmp/sandbox"),
        };

        let msg = err.to_string();
        assert!(msg.contains("../secrets.txt"));
        assert!(msg.contains("outside the permitted working directory"));
    }
}
