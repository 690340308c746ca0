//! ToolContext - execution context handed to every tool
//!
//! The context carries the sandbox root alongside (never merged into) the
//! model-supplied arguments. All path validation lives here.

use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::ToolError;

/// Execution context for tools - scoped to one agent run
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Sandbox root - all file and process operations are constrained here
    pub working_dir: PathBuf,
}

impl ToolContext {
    /// Create a new tool context rooted at `working_dir`
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Validate that a path stays inside the working directory
    ///
    /// Returns the absolute, normalized path on success. The check is
    /// component-wise (`Path::starts_with`), so a sibling directory whose
    /// name shares a byte prefix with the root does not slip through.
    pub fn validate_path(&self, path: &Path) -> Result<PathBuf, ToolError> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        };

        // Resolve `.` and `..` lexically first so escapes through
        // not-yet-existing parents are caught before any filesystem access.
        let normalized = lexical_normalize(&joined);
        let resolved = resolve_existing_prefix(&normalized);

        let root = self.working_dir.canonicalize().unwrap_or_else(|_| self.working_dir.clone());

        if resolved.starts_with(&root) {
            Ok(resolved)
        } else {
            debug!(?path, ?resolved, "validate_path: sandbox violation");
            Err(ToolError::SandboxViolation {
                path: path.to_path_buf(),
                working_dir: self.working_dir.clone(),
            })
        }
    }
}

/// Remove `.` components and resolve `..` against preceding components
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Canonicalize the longest existing prefix of `path`, re-attaching the rest
///
/// Canonicalizing resolves symlinks for paths (or parents) that exist;
/// paths that do not exist yet keep their normalized tail.
fn resolve_existing_prefix(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let mut ancestor = path;
    let mut tail: Vec<std::ffi::OsString> = Vec::new();
    while let Some(parent) = ancestor.parent() {
        if let Some(name) = ancestor.file_name() {
            tail.push(name.to_os_string());
        }
        ancestor = parent;
        if ancestor.exists() {
            break;
        }
    }

    let mut out = ancestor.canonicalize().unwrap_or_else(|_| ancestor.to_path_buf());
    for name in tail.iter().rev() {
        out.push(name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_path_within_working_dir() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("test.txt"), "content").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = ctx.validate_path(Path::new("test.txt"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_path_outside_working_dir() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = ctx.validate_path(Path::new("/etc/passwd"));
        assert!(matches!(result, Err(ToolError::SandboxViolation { .. })));
    }

    #[test]
    fn test_validate_path_parent_escape() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = ctx.validate_path(Path::new("../outside.txt"));
        assert!(matches!(result, Err(ToolError::SandboxViolation { .. })));
    }

    #[test]
    fn test_validate_path_escape_through_missing_parent() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        // The escape target's parent does not exist; the lexical pass must
        // still reject it.
        let result = ctx.validate_path(Path::new("../no-such-dir/outside.txt"));
        assert!(matches!(result, Err(ToolError::SandboxViolation { .. })));
    }

    #[test]
    fn test_validate_path_sibling_prefix_dir() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("work");
        let sibling = temp.path().join("workbench");
        fs::create_dir(&root).unwrap();
        fs::create_dir(&sibling).unwrap();
        fs::write(sibling.join("file.txt"), "outside").unwrap();

        let ctx = ToolContext::new(root);

        // "/…/workbench" starts with the bytes of "/…/work" but is not a
        // descendant of it.
        let result = ctx.validate_path(Path::new("../workbench/file.txt"));
        assert!(matches!(result, Err(ToolError::SandboxViolation { .. })));
    }

    #[test]
    fn test_validate_new_file_path() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = ctx.validate_path(Path::new("new_file.txt"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_new_nested_file_path() {
        let temp = tempdir().unwrap();
        let ctx = ToolContext::new(temp.path().to_path_buf());

        let result = ctx.validate_path(Path::new("nested/dir/new_file.txt")).unwrap();
        assert!(result.ends_with("nested/dir/new_file.txt"));
    }

    #[test]
    fn test_validate_dotted_path_inside() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("test.txt"), "content").unwrap();

        let ctx = ToolContext::new(temp.path().to_path_buf());

        // Wanders through a subdirectory but lands back inside the root.
        let result = ctx.validate_path(Path::new("sub/../test.txt"));
        assert!(result.is_ok());
    }
}
