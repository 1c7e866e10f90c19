//! Resolver options configuration.
//!
//! This module provides the [`ResolveOptions`] struct for configuring how
//! lookup commands are run: the per-strategy time limit and the login shells
//! tried on POSIX systems.

use std::path::PathBuf;
use std::time::Duration;

/// Login shells tried on POSIX, highest priority first.
pub const DEFAULT_LOGIN_SHELLS: &[&str] = &["/bin/zsh", "/bin/bash", "/bin/sh"];

/// Default time limit for a single lookup command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration options for executable resolution.
///
/// # Default Behavior
///
/// Each lookup command gets 5 seconds. A login shell whose profile scripts
/// hang (a version manager probing a network mount, say) is killed after
/// that and the next strategy runs. Set `timeout` to `None` to wait
/// indefinitely instead.
///
/// # Example
///
/// ```rust
/// use agent_locator::ResolveOptions;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// // 5 second limit, zsh then bash then sh
/// let opts = ResolveOptions::default();
///
/// // Slow machine
/// let opts = ResolveOptions {
///     timeout: Some(Duration::from_secs(15)),
///     ..Default::default()
/// };
///
/// // Only ever ask bash
/// let opts = ResolveOptions {
///     login_shells: vec![PathBuf::from("/bin/bash")],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Time limit for each lookup command, or `None` for no limit.
    ///
    /// Default: 5 seconds
    pub timeout: Option<Duration>,

    /// Login shells tried in order on POSIX. Shells that are not installed
    /// are skipped.
    ///
    /// Default: `/bin/zsh`, `/bin/bash`, `/bin/sh`
    pub login_shells: Vec<PathBuf>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            login_shells: DEFAULT_LOGIN_SHELLS.iter().map(PathBuf::from).collect(),
        }
    }
}
