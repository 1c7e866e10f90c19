//! Resolution requests.

use std::path::{Path, PathBuf};

/// Executable name of the Cursor agent CLI.
pub const CURSOR_AGENT: &str = "cursor-agent";

/// What to look for, and where to look from.
///
/// A request is cheap to build and meant to be thrown away after one
/// resolution; nothing about a previous lookup is remembered.
///
/// # Example
///
/// ```rust
/// use agent_locator::{ResolutionRequest, CURSOR_AGENT};
///
/// let request = ResolutionRequest::new("/home/u/project", CURSOR_AGENT);
/// assert_eq!(request.override_var(), Some("CURSOR_AGENT"));
///
/// let request = request.with_override_var("MY_AGENT_BIN");
/// assert_eq!(request.override_var(), Some("MY_AGENT_BIN"));
///
/// let request = request.without_override();
/// assert_eq!(request.override_var(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    work_dir: PathBuf,
    tool_name: String,
    override_var: Option<String>,
}

impl ResolutionRequest {
    /// Look up `tool_name` from `work_dir`.
    ///
    /// The override variable defaults to the tool name upper-cased with
    /// every non-alphanumeric character replaced by `_`, so `cursor-agent`
    /// is overridden by `CURSOR_AGENT`.
    pub fn new(work_dir: impl Into<PathBuf>, tool_name: impl Into<String>) -> Self {
        let tool_name = tool_name.into();
        let override_var = Some(override_var_for(&tool_name));
        Self {
            work_dir: work_dir.into(),
            tool_name,
            override_var,
        }
    }

    /// Use a different environment variable as the override.
    pub fn with_override_var(mut self, name: impl Into<String>) -> Self {
        self.override_var = Some(name.into());
        self
    }

    /// Ignore any override variable.
    pub fn without_override(mut self) -> Self {
        self.override_var = None;
        self
    }

    /// Working directory lookup commands run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Name of the command being looked up.
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Environment variable consulted before any lookup, if any.
    pub fn override_var(&self) -> Option<&str> {
        self.override_var.as_deref()
    }
}

fn override_var_for(tool_name: &str) -> String {
    tool_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_var_derivation() {
        assert_eq!(override_var_for("cursor-agent"), "CURSOR_AGENT");
        assert_eq!(override_var_for("claude"), "CLAUDE");
        assert_eq!(override_var_for("my.tool-2"), "MY_TOOL_2");
    }

    #[test]
    fn test_accessors() {
        let request = ResolutionRequest::new("/tmp/project", CURSOR_AGENT);
        assert_eq!(request.work_dir(), Path::new("/tmp/project"));
        assert_eq!(request.tool_name(), "cursor-agent");
        assert_eq!(request.override_var(), Some("CURSOR_AGENT"));
    }

    #[test]
    fn test_override_builders() {
        let request = ResolutionRequest::new("/tmp", "codex").without_override();
        assert!(request.override_var().is_none());

        let request = request.with_override_var("CODEX_BIN");
        assert_eq!(request.override_var(), Some("CODEX_BIN"));
    }
}
