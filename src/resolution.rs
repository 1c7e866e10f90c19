//! Resolution results.

use crate::Strategy;
use std::path::{Path, PathBuf};

/// Where a resolved path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Origin {
    /// The override environment variable named this path.
    Override {
        /// Name of the variable that was read.
        var: String,
    },
    /// A lookup strategy printed this path.
    Strategy(Strategy),
}

/// Result of resolving a command.
///
/// The contract is binary: either a path that existed and was executable
/// when it was checked, or nothing. Nothing guarantees the file is still
/// there by the time it is launched.
///
/// # Example
///
/// ```rust
/// use agent_locator::Resolution;
///
/// fn describe(resolution: &Resolution) -> String {
///     match resolution.path() {
///         Some(path) => format!("found at {}", path.display()),
///         None => "not installed".to_string(),
///     }
/// }
///
/// assert_eq!(describe(&Resolution::NotFound), "not installed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An executable was located.
    Found {
        /// Path to the executable.
        path: PathBuf,
        /// How it was located.
        origin: Origin,
    },

    /// Every applicable lookup was tried without success.
    NotFound,
}

impl Resolution {
    /// Whether an executable was located.
    ///
    /// ```rust
    /// use agent_locator::Resolution;
    ///
    /// assert!(!Resolution::NotFound.is_found());
    /// ```
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Path to the executable, if one was located.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound => None,
        }
    }

    /// How the executable was located, if it was.
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            Self::Found { origin, .. } => Some(origin),
            Self::NotFound => None,
        }
    }

    /// Consume the result, keeping only the path.
    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found() -> Resolution {
        Resolution::Found {
            path: PathBuf::from("/home/u/.local/bin/cursor-agent"),
            origin: Origin::Strategy(Strategy::LoginShell {
                shell: PathBuf::from("/bin/zsh"),
                name: "cursor-agent".to_string(),
            }),
        }
    }

    #[test]
    fn test_found() {
        let resolution = found();
        assert!(resolution.is_found());
        assert_eq!(
            resolution.path(),
            Some(Path::new("/home/u/.local/bin/cursor-agent"))
        );
        assert!(matches!(resolution.origin(), Some(Origin::Strategy(_))));
        assert_eq!(
            resolution.into_path(),
            Some(PathBuf::from("/home/u/.local/bin/cursor-agent"))
        );
    }

    #[test]
    fn test_not_found() {
        let resolution = Resolution::NotFound;
        assert!(!resolution.is_found());
        assert!(resolution.path().is_none());
        assert!(resolution.origin().is_none());
        assert!(resolution.into_path().is_none());
    }

    #[test]
    fn test_override_origin() {
        let resolution = Resolution::Found {
            path: PathBuf::from("/opt/agent"),
            origin: Origin::Override {
                var: "CURSOR_AGENT".to_string(),
            },
        };
        assert_eq!(
            resolution.origin(),
            Some(&Origin::Override {
                var: "CURSOR_AGENT".to_string()
            })
        );
    }
}
