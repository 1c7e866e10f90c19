//! Launching a resolved tool through the host's terminal.
//!
//! The host application owns both the terminal widget and the user-facing
//! notifications; this module only defines the two seams and the glue that
//! turns launch failures and missing tools into notifications.

use crate::shell::command_line;
use crate::{LaunchError, Resolution, ResolutionRequest};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Prefix for notifications about commands that failed to start.
pub const LAUNCH_FAILED_PREFIX: &str = "Launch failed: ";

/// How prominently a notification should be shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Something the user should look at.
    Warning,
    /// Something failed.
    Error,
}

/// Sink for user-visible messages.
pub trait Notifier {
    /// Show `message` to the user.
    fn notify(&self, message: &str, severity: Severity);
}

/// Runs a full command line in an interactive terminal.
pub trait InteractiveRunner {
    /// Start `command_line`. Returns once the command has been handed to
    /// the terminal, not when it exits.
    fn run_interactive(&self, command_line: &str) -> Result<(), LaunchError>;
}

/// Run `command_line`, reporting a failure to start through `notifier`.
///
/// Returns whether the command was started.
///
/// # Example
///
/// ```rust
/// use agent_locator::{launch, InteractiveRunner, LaunchError, Notifier, Severity};
/// use std::cell::RefCell;
///
/// struct NoTerminal;
/// impl InteractiveRunner for NoTerminal {
///     fn run_interactive(&self, _: &str) -> Result<(), LaunchError> {
///         Err(LaunchError::new("terminal closed"))
///     }
/// }
///
/// #[derive(Default)]
/// struct Log(RefCell<Vec<String>>);
/// impl Notifier for Log {
///     fn notify(&self, message: &str, _: Severity) {
///         self.0.borrow_mut().push(message.to_string());
///     }
/// }
///
/// let log = Log::default();
/// assert!(!launch(&NoTerminal, &log, "cursor-agent"));
/// assert_eq!(log.0.borrow()[0], "Launch failed: terminal closed");
/// ```
pub fn launch<T, N>(runner: &T, notifier: &N, command_line: &str) -> bool
where
    T: InteractiveRunner + ?Sized,
    N: Notifier + ?Sized,
{
    match runner.run_interactive(command_line) {
        Ok(()) => true,
        Err(error) => {
            warn!(%error, command_line, "failed to launch command");
            notifier.notify(&format!("{LAUNCH_FAILED_PREFIX}{error}"), Severity::Error);
            false
        }
    }
}

/// Launch the tool `resolution` located, or tell the user it is missing.
///
/// The executable path and `args` are shell-quoted into a single command
/// line. When nothing was found a warning naming the tool (and its
/// override variable, if the request has one) is sent instead.
pub fn launch_resolved<T, N>(
    request: &ResolutionRequest,
    resolution: &Resolution,
    args: &[&str],
    runner: &T,
    notifier: &N,
) -> bool
where
    T: InteractiveRunner + ?Sized,
    N: Notifier + ?Sized,
{
    match resolution.path() {
        Some(path) => launch(runner, notifier, &command_line(path, args)),
        None => {
            notifier.notify(&not_found_message(request), Severity::Warning);
            false
        }
    }
}

fn not_found_message(request: &ResolutionRequest) -> String {
    match request.override_var() {
        Some(var) => format!(
            "Could not find `{}`. Install it or set {var} to the full path of the executable.",
            request.tool_name()
        ),
        None => format!(
            "Could not find `{}`. Make sure it is installed and on your PATH.",
            request.tool_name()
        ),
    }
}
