//! Host platform identity used to pick a lookup branch.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The platform family a resolver dispatches on.
///
/// Only two families exist. Anything that is not Windows is treated as
/// POSIX, since every other kernel we run on offers a POSIX shell.
///
/// # Example
///
/// ```rust
/// use agent_locator::Platform;
///
/// assert_eq!(Platform::from_os_name("Windows 11"), Platform::Windows);
/// assert_eq!(Platform::from_os_name("macos"), Platform::Posix);
/// assert_eq!(Platform::from_os_name("haiku"), Platform::Posix);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    /// Windows family: `where.exe` and PowerShell lookups.
    Windows,
    /// Unix, Linux, macOS and everything else: login shell lookups.
    Posix,
}

impl Platform {
    /// The platform of the running process.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Classify an OS name. Names starting with `windows` (any case) are
    /// Windows; every other name is POSIX.
    pub fn from_os_name(name: &str) -> Self {
        if name.trim().to_ascii_lowercase().starts_with("windows") {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Iterator over both platform families.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
