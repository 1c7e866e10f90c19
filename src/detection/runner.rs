//! Subprocess execution with an optional time limit.

use crate::StrategyError;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// A program plus its arguments, as spawned by a lookup strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run, either a bare name resolved by the OS or a full path.
    pub program: PathBuf,
    /// Arguments passed verbatim, without any shell interpretation.
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation of `program` with `args`.
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs lookup commands on behalf of the resolver.
///
/// The resolver only ever needs the combined stdout and stderr bytes of a
/// finished process; exit status is ignored because every lookup command
/// either prints a path or prints nothing useful. Implement this trait to
/// feed canned output into the resolver in tests.
pub trait CommandRunner {
    /// Run `invocation` with `work_dir` as its working directory and return
    /// stdout followed by stderr.
    ///
    /// When `limit` is set, a process that has not exited in time is killed
    /// and [`StrategyError::Timeout`] is returned.
    fn run(
        &self,
        invocation: &Invocation,
        work_dir: &Path,
        limit: Option<Duration>,
    ) -> impl Future<Output = Result<Vec<u8>, StrategyError>> + Send;
}

/// [`CommandRunner`] backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        invocation: &Invocation,
        work_dir: &Path,
        limit: Option<Duration>,
    ) -> Result<Vec<u8>, StrategyError> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match limit {
            Some(limit) => timeout(limit, command.output())
                .await
                .map_err(|_| StrategyError::Timeout(limit))?,
            None => command.output().await,
        }
        .map_err(StrategyError::Spawn)?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Ok(combined)
    }
}
