//! Typed failures produced by individual lookup strategies.
//!
//! None of these ever reach the caller of [`crate::resolve`]. They exist so
//! that every strategy boundary returns a visible value the resolver can log
//! and step past.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Why a single lookup strategy produced no usable candidate.
///
/// # Example
///
/// ```rust
/// use agent_locator::StrategyError;
/// use std::path::PathBuf;
///
/// let error = StrategyError::NotExecutable(PathBuf::from("/tmp/readme.txt"));
/// assert_eq!(error.to_string(), "candidate is not an executable file: /tmp/readme.txt");
/// assert!(!error.is_timeout());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrategyError {
    /// The lookup process could not be started or waited on.
    #[error("failed to run lookup command: {0}")]
    Spawn(#[source] std::io::Error),

    /// The lookup process did not exit within the configured limit.
    #[error("lookup command timed out after {0:?}")]
    Timeout(Duration),

    /// The lookup output was not valid UTF-8.
    #[error("lookup output is not valid UTF-8")]
    Decode,

    /// The lookup ran but printed nothing.
    #[error("lookup produced no output")]
    EmptyOutput,

    /// The lookup printed a relative path or a bare name, as `command -v`
    /// does for aliases and shell functions.
    #[error("candidate is not an absolute path: {}", .0.display())]
    NotAbsolute(PathBuf),

    /// The lookup printed something that is not an executable file.
    #[error("candidate is not an executable file: {}", .0.display())]
    NotExecutable(PathBuf),

    /// The login shell for this strategy is not installed.
    #[error("shell not present: {}", .0.display())]
    ShellMissing(PathBuf),
}

impl StrategyError {
    /// Whether this failure came from the per-strategy time limit.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// The interactive runner could not start a command.
///
/// Raised only by a [`crate::InteractiveRunner`] implementation; the launch
/// helpers turn it into a user notification.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LaunchError {
    message: String,
}

impl LaunchError {
    /// Create a launch error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message describing the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for LaunchError {
    fn from(error: std::io::Error) -> Self {
        Self::new(error.to_string())
    }
}
