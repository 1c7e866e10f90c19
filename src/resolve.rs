//! Executable resolution.

use crate::detection::{is_executable, CommandRunner, ProcessRunner, Strategy};
use crate::{expand_home, Origin, Platform, Resolution, ResolutionRequest, ResolveOptions};
use futures::future::join_all;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Locates command-line tools on the current machine.
///
/// A resolver holds configuration only. Every call to [`Resolver::resolve`]
/// starts from scratch, so one resolver can be shared freely between tasks
/// and threads.
///
/// # Resolution Process
///
/// 1. If the request's override variable is set to an executable file
///    (after `~` expansion), return it without looking any further
/// 2. Otherwise build the strategy list for the platform:
///    - Windows: `where.exe <name>`, PowerShell `Get-Command <name>`, then
///      `where.exe` with `.exe`, `.cmd` and `.bat` appended
///    - POSIX: `command -v <name>` in each configured login shell that exists
/// 3. Run the strategies one after another; the first one that prints the
///    path of an executable file wins
/// 4. If none does, report [`Resolution::NotFound`]
///
/// No failure along the way is ever returned to the caller.
///
/// # Example
///
/// ```rust,no_run
/// use agent_locator::{ResolutionRequest, Resolver, CURSOR_AGENT};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let request = ResolutionRequest::new("/home/u/project", CURSOR_AGENT);
///     let resolution = Resolver::new().resolve(&request).await;
///     match resolution.path() {
///         Some(path) => println!("cursor-agent is at {}", path.display()),
///         None => println!("cursor-agent is not installed"),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<R = ProcessRunner> {
    runner: R,
    options: ResolveOptions,
    platform: Platform,
}

impl Resolver<ProcessRunner> {
    /// A resolver for the host platform that spawns real processes.
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner)
    }
}

impl Default for Resolver<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Resolver<R> {
    /// A resolver for the host platform using `runner` for lookups.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            options: ResolveOptions::default(),
            platform: Platform::current(),
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Use the lookup strategies of `platform` instead of the host's.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Platform whose strategies this resolver runs.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Options in effect.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }
}

impl<R: CommandRunner> Resolver<R> {
    /// Resolve the command described by `request`.
    pub async fn resolve(&self, request: &ResolutionRequest) -> Resolution {
        if let Some(resolution) = check_override(request) {
            return resolution;
        }

        let plan = Strategy::plan(
            self.platform,
            request.tool_name(),
            &self.options.login_shells,
        );
        match first_success(plan, &self.runner, request.work_dir(), self.options.timeout).await {
            Some((strategy, path)) => {
                debug!(
                    tool = request.tool_name(),
                    path = %path.display(),
                    %strategy,
                    "resolved executable"
                );
                Resolution::Found {
                    path,
                    origin: Origin::Strategy(strategy),
                }
            }
            None => {
                debug!(
                    tool = request.tool_name(),
                    platform = %self.platform,
                    "no lookup strategy located the executable"
                );
                Resolution::NotFound
            }
        }
    }

    /// Resolve several commands from the same working directory.
    ///
    /// The commands are resolved concurrently; each one still runs its own
    /// strategies strictly in order. Every name gets its default override
    /// variable (see [`ResolutionRequest::new`]).
    pub async fn resolve_all<I, S>(&self, work_dir: &Path, tools: I) -> HashMap<String, Resolution>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let futures: Vec<_> = tools
            .into_iter()
            .map(|tool| {
                let request = ResolutionRequest::new(work_dir, tool);
                async move {
                    let resolution = self.resolve(&request).await;
                    (request.tool_name().to_string(), resolution)
                }
            })
            .collect();

        join_all(futures).await.into_iter().collect()
    }
}

/// Accept the override variable's value if it names an executable file.
fn check_override(request: &ResolutionRequest) -> Option<Resolution> {
    let var = request.override_var()?;
    let value = std::env::var(var).ok()?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let path = PathBuf::from(expand_home(Some(value))?);
    if is_executable(&path) {
        debug!(var, path = %path.display(), "using executable from override variable");
        Some(Resolution::Found {
            path,
            origin: Origin::Override {
                var: var.to_string(),
            },
        })
    } else {
        debug!(var, path = %path.display(), "override variable is not an executable file, ignoring");
        None
    }
}

/// Try each strategy in order and stop at the first usable path.
async fn first_success<R: CommandRunner>(
    plan: Vec<Strategy>,
    runner: &R,
    work_dir: &Path,
    limit: Option<Duration>,
) -> Option<(Strategy, PathBuf)> {
    for strategy in plan {
        trace!(%strategy, "trying lookup strategy");
        match strategy.attempt(runner, work_dir, limit).await {
            Ok(path) => return Some((strategy, path)),
            Err(error) => debug!(%strategy, %error, "lookup strategy produced no candidate"),
        }
    }
    None
}

/// Resolve `tool_name` from `work_dir` with default settings.
///
/// Shorthand for [`Resolver::new`] plus [`ResolutionRequest::new`], keeping
/// only the path.
///
/// # Example
///
/// ```rust,no_run
/// use agent_locator::{resolve, CURSOR_AGENT};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     if let Some(path) = resolve(".", CURSOR_AGENT).await {
///         println!("{}", path.display());
///     }
/// }
/// ```
pub async fn resolve(work_dir: impl Into<PathBuf>, tool_name: &str) -> Option<PathBuf> {
    let request = ResolutionRequest::new(work_dir, tool_name);
    Resolver::new().resolve(&request).await.into_path()
}

/// Resolve several tools concurrently with default settings.
///
/// ```rust,no_run
/// use agent_locator::resolve_all;
/// use std::path::Path;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let all = resolve_all(Path::new("."), &["cursor-agent", "claude"]).await;
///     for (tool, resolution) in &all {
///         println!("{tool}: {:?}", resolution.path());
///     }
/// }
/// ```
pub async fn resolve_all(work_dir: &Path, tools: &[&str]) -> HashMap<String, Resolution> {
    Resolver::new()
        .resolve_all(work_dir, tools.iter().copied())
        .await
}

/// Blocking form of [`resolve`] for callers without an async runtime.
///
/// Runs the lookup on a private single-threaded runtime. Called from inside
/// a Tokio runtime it cannot block, so it logs a warning and returns `None`;
/// use [`resolve`] there instead.
pub fn resolve_blocking(work_dir: impl Into<PathBuf>, tool_name: &str) -> Option<PathBuf> {
    if tokio::runtime::Handle::try_current().is_ok() {
        warn!(
            tool = tool_name,
            "resolve_blocking called inside an async runtime, use resolve instead"
        );
        return None;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            warn!(%error, "failed to start runtime for executable lookup");
            return None;
        }
    };
    runtime.block_on(resolve(work_dir, tool_name))
}
