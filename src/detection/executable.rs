//! Filesystem executability checks for lookup candidates.

use crate::StrategyError;
use std::path::{Path, PathBuf};

/// Whether `path` is an existing regular file with an execute permission bit.
///
/// On Unix any of the owner, group or other execute bits counts; whether
/// this particular process may run it is left to the OS at launch time.
/// Elsewhere existence as a file is all the filesystem can tell us.
#[cfg(unix)]
pub(crate) fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub(crate) fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Turn a trimmed line of lookup output into an accepted path.
///
/// Only absolute paths are accepted. `command -v` prints a bare name for
/// aliases and shell functions, and a relative name would be checked
/// against this process's directory rather than the lookup's.
pub(crate) fn accept_candidate(candidate: &str) -> Result<PathBuf, StrategyError> {
    if candidate.is_empty() {
        return Err(StrategyError::EmptyOutput);
    }
    let path = PathBuf::from(candidate);
    if !path.is_absolute() {
        return Err(StrategyError::NotAbsolute(path));
    }
    if is_executable(&path) {
        Ok(path)
    } else {
        Err(StrategyError::NotExecutable(path))
    }
}
