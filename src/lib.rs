//! # agent-locator
//!
//! Locate AI coding agent CLIs such as `cursor-agent` across platforms and
//! shell setups.
//!
//! Tools like these are often installed through version managers or shell
//! frameworks that only add their directory to `PATH` in a login shell's
//! profile scripts. A plain `PATH` search from a GUI process misses them.
//! This crate asks the system the way a user's terminal would:
//!
//! - an override environment variable (e.g. `CURSOR_AGENT`) always wins if
//!   it names an executable file
//! - on Windows: `where.exe`, then PowerShell `Get-Command`, then `where.exe`
//!   again with `.exe`, `.cmd` and `.bat` appended
//! - everywhere else: `command -v` inside `zsh`, `bash` and `sh` login shells
//!
//! Every candidate must be an existing executable file. Lookup failures are
//! never errors; the only failure outcome is [`Resolution::NotFound`].
//! Nothing is cached between calls.
//!
//! ## Example
//!
//! ```rust,no_run
//! use agent_locator::{resolve, ResolutionRequest, Resolver, CURSOR_AGENT};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // Quick path lookup
//!     if let Some(path) = resolve("/home/u/project", CURSOR_AGENT).await {
//!         println!("cursor-agent is at {}", path.display());
//!     }
//!
//!     // Full result, including how the path was found
//!     let request = ResolutionRequest::new("/home/u/project", CURSOR_AGENT);
//!     let resolution = Resolver::new().resolve(&request).await;
//!     println!("{:?}", resolution.origin());
//! }
//! ```

mod detection;
mod error;
mod home;
mod launch;
mod options;
mod platform;
mod request;
mod resolution;
mod resolve;
mod shell;

pub use detection::{CommandRunner, Invocation, ProcessRunner, Strategy};
pub use error::{LaunchError, StrategyError};
pub use home::expand_home;
pub use launch::{
    launch, launch_resolved, InteractiveRunner, Notifier, Severity, LAUNCH_FAILED_PREFIX,
};
pub use options::{ResolveOptions, DEFAULT_LOGIN_SHELLS, DEFAULT_TIMEOUT};
pub use platform::Platform;
pub use request::{ResolutionRequest, CURSOR_AGENT};
pub use resolution::{Origin, Resolution};
pub use resolve::{resolve, resolve_all, resolve_blocking, Resolver};
pub use shell::{command_line, shell_quote};
