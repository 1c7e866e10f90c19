//! Lookup strategies and the per-platform order they run in.

use super::executable::accept_candidate;
use super::runner::{CommandRunner, Invocation};
use crate::shell::shell_quote;
use crate::{Platform, StrategyError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Suffixes retried with `where.exe` when the bare name is not found.
pub(crate) const WINDOWS_EXTENSIONS: &[&str] = &[".exe", ".cmd", ".bat"];

/// One way of asking the system where a command lives.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Strategy {
    /// `where.exe <query>`; only the first printed line counts.
    Where {
        /// Name passed to `where.exe`, possibly with an extension appended.
        query: String,
    },
    /// PowerShell `Get-Command`, which also sees aliases and functions.
    GetCommand {
        /// Command name to look up.
        name: String,
    },
    /// `<shell> -lc "command -v <name> || true"` in a login shell, so that
    /// profile scripts get a chance to extend `PATH` first.
    LoginShell {
        /// Absolute path of the shell interpreter.
        shell: PathBuf,
        /// Command name to look up.
        name: String,
    },
}

impl Strategy {
    /// The strategies for `platform`, in the order they must be tried.
    ///
    /// `login_shells` is only consulted on POSIX.
    ///
    /// ```rust
    /// use agent_locator::{Platform, Strategy};
    /// use std::path::PathBuf;
    ///
    /// let plan = Strategy::plan(Platform::Windows, "cursor-agent", &[]);
    /// assert_eq!(plan.len(), 5);
    ///
    /// let shells = [PathBuf::from("/bin/zsh"), PathBuf::from("/bin/sh")];
    /// let plan = Strategy::plan(Platform::Posix, "cursor-agent", &shells);
    /// assert_eq!(plan.len(), 2);
    /// ```
    pub fn plan(platform: Platform, name: &str, login_shells: &[PathBuf]) -> Vec<Self> {
        match platform {
            Platform::Windows => {
                let mut plan = vec![
                    Self::Where {
                        query: name.to_string(),
                    },
                    Self::GetCommand {
                        name: name.to_string(),
                    },
                ];
                plan.extend(WINDOWS_EXTENSIONS.iter().map(|ext| Self::Where {
                    query: format!("{name}{ext}"),
                }));
                plan
            }
            Platform::Posix => login_shells
                .iter()
                .map(|shell| Self::LoginShell {
                    shell: shell.clone(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// The command this strategy spawns.
    pub fn invocation(&self) -> Invocation {
        match self {
            Self::Where { query } => Invocation::new("where.exe", [query.as_str()]),
            Self::GetCommand { name } => Invocation::new(
                "powershell.exe",
                [
                    "-Command".to_string(),
                    format!(
                        "Get-Command {} -ErrorAction SilentlyContinue | Select-Object -ExpandProperty Source",
                        powershell_quote(name)
                    ),
                ],
            ),
            Self::LoginShell { shell, name } => Invocation::new(
                shell.clone(),
                [
                    "-lc".to_string(),
                    format!("command -v {} || true", shell_quote(Some(name))),
                ],
            ),
        }
    }

    /// Run this strategy once and validate what it printed.
    pub(crate) async fn attempt<R: CommandRunner>(
        &self,
        runner: &R,
        work_dir: &Path,
        limit: Option<Duration>,
    ) -> Result<PathBuf, StrategyError> {
        if let Self::LoginShell { shell, .. } = self {
            if !shell.exists() {
                return Err(StrategyError::ShellMissing(shell.clone()));
            }
        }

        let raw = runner.run(&self.invocation(), work_dir, limit).await?;
        let text = String::from_utf8(raw).map_err(|_| StrategyError::Decode)?;
        let text = text.trim();

        let candidate = match self {
            Self::Where { .. } => first_line(text),
            Self::GetCommand { .. } | Self::LoginShell { .. } => text,
        };
        accept_candidate(candidate)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Where { query } => write!(f, "where.exe {query}"),
            Self::GetCommand { name } => write!(f, "powershell Get-Command {name}"),
            Self::LoginShell { shell, name } => {
                write!(f, "{} login shell lookup of {name}", shell.display())
            }
        }
    }
}

/// Single-quote `s` for PowerShell, where a literal `'` is written `''`.
fn powershell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// First line of `text`, tolerating both `\n` and `\r\n` endings.
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::super::executable::fixtures;
    use super::*;
    use std::sync::Mutex;

    /// Replies to every invocation with the same bytes and records calls.
    struct Echo {
        reply: Vec<u8>,
        calls: Mutex<Vec<Invocation>>,
    }

    impl Echo {
        fn new(reply: impl Into<Vec<u8>>) -> Self {
            Self {
                reply: reply.into(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for Echo {
        async fn run(
            &self,
            invocation: &Invocation,
            _work_dir: &Path,
            _limit: Option<Duration>,
        ) -> Result<Vec<u8>, StrategyError> {
            self.calls.lock().unwrap().push(invocation.clone());
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn test_windows_plan_order() {
        let plan = Strategy::plan(Platform::Windows, "cursor-agent", &[PathBuf::from("/bin/zsh")]);
        let rendered: Vec<_> = plan.iter().map(|s| s.invocation().to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "where.exe cursor-agent",
                "powershell.exe -Command Get-Command 'cursor-agent' -ErrorAction SilentlyContinue | Select-Object -ExpandProperty Source",
                "where.exe cursor-agent.exe",
                "where.exe cursor-agent.cmd",
                "where.exe cursor-agent.bat",
            ]
        );
    }

    #[test]
    fn test_posix_plan_follows_shell_order() {
        let shells = [
            PathBuf::from("/bin/zsh"),
            PathBuf::from("/bin/bash"),
            PathBuf::from("/bin/sh"),
        ];
        let plan = Strategy::plan(Platform::Posix, "cursor-agent", &shells);
        let programs: Vec<_> = plan.iter().map(|s| s.invocation().program).collect();
        assert_eq!(programs, shells);

        let invocation = plan[0].invocation();
        assert_eq!(invocation.args, vec!["-lc", "command -v 'cursor-agent' || true"]);
    }

    #[test]
    fn test_first_line_mixed_endings() {
        assert_eq!(first_line("C:\\a.exe\r\nC:\\b.exe"), "C:\\a.exe");
        assert_eq!(first_line("C:\\a.exe\nC:\\b.exe\r\n"), "C:\\a.exe");
        assert_eq!(first_line(""), "");
    }

    #[tokio::test]
    async fn test_where_takes_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let first = fixtures::executable(dir.path(), "first");
        let second = fixtures::executable(dir.path(), "second");
        let runner = Echo::new(format!(
            "{}\r\n{}\r\n",
            first.display(),
            second.display()
        ));

        let strategy = Strategy::Where {
            query: "cursor-agent".to_string(),
        };
        let found = strategy.attempt(&runner, dir.path(), None).await.unwrap();
        assert_eq!(found, first);
    }

    #[tokio::test]
    async fn test_get_command_uses_whole_output() {
        let dir = tempfile::tempdir().unwrap();
        let first = fixtures::executable(dir.path(), "first");
        let runner = Echo::new(format!("{}\nextra\n", first.display()));

        let strategy = Strategy::GetCommand {
            name: "cursor-agent".to_string(),
        };
        let result = strategy.attempt(&runner, dir.path(), None).await;
        assert!(matches!(result, Err(StrategyError::NotExecutable(_))));
    }

    #[tokio::test]
    async fn test_missing_shell_is_not_spawned() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Echo::new("/bin/sh");
        let strategy = Strategy::LoginShell {
            shell: dir.path().join("zsh"),
            name: "cursor-agent".to_string(),
        };

        let result = strategy.attempt(&runner, dir.path(), None).await;
        assert!(matches!(result, Err(StrategyError::ShellMissing(_))));
        assert!(runner.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_and_invalid_output() {
        let dir = tempfile::tempdir().unwrap();
        let strategy = Strategy::Where {
            query: "cursor-agent".to_string(),
        };

        let blank = Echo::new("  \r\n ");
        assert!(matches!(
            strategy.attempt(&blank, dir.path(), None).await,
            Err(StrategyError::EmptyOutput)
        ));

        let garbage = Echo::new(vec![0xff, 0xfe, 0x00]);
        assert!(matches!(
            strategy.attempt(&garbage, dir.path(), None).await,
            Err(StrategyError::Decode)
        ));

        let noise = Echo::new("INFO: Could not find files for the given pattern(s).");
        assert!(matches!(
            strategy.attempt(&noise, dir.path(), None).await,
            Err(StrategyError::NotAbsolute(_))
        ));
    }

    #[tokio::test]
    async fn test_bare_name_from_login_shell_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let shell = fixtures::executable(dir.path(), "zsh");
        // An alias or shell function makes `command -v` print just the name.
        let runner = Echo::new("cursor-agent\n");
        let strategy = Strategy::LoginShell {
            shell,
            name: "cursor-agent".to_string(),
        };

        let result = strategy.attempt(&runner, dir.path(), None).await;
        assert!(matches!(result, Err(StrategyError::NotAbsolute(_))));
    }

    #[test]
    fn test_get_command_name_is_quoted() {
        let strategy = Strategy::GetCommand {
            name: "x'; Remove-Item C:\\ -Recurse; '".to_string(),
        };
        let invocation = strategy.invocation();
        assert_eq!(
            invocation.args[1],
            "Get-Command 'x''; Remove-Item C:\\ -Recurse; ''' -ErrorAction SilentlyContinue | Select-Object -ExpandProperty Source"
        );
        assert_eq!(powershell_quote("it's"), "'it''s'");
    }

    #[test]
    fn test_display() {
        let strategy = Strategy::LoginShell {
            shell: PathBuf::from("/bin/bash"),
            name: "cursor-agent".to_string(),
        };
        assert_eq!(strategy.to_string(), "/bin/bash login shell lookup of cursor-agent");
    }
}
