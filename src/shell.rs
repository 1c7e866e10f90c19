//! POSIX shell quoting.

use std::path::Path;

/// Quote a string so it can be spliced literally into a POSIX shell
/// command line.
///
/// The result is wrapped in single quotes and every embedded `'` becomes
/// `'\''`. `None` quotes as the empty string `''`.
///
/// # Example
///
/// ```rust
/// use agent_locator::shell_quote;
///
/// assert_eq!(shell_quote(Some("a'b")), r"'a'\''b'");
/// assert_eq!(shell_quote(None), "''");
/// ```
pub fn shell_quote(s: Option<&str>) -> String {
    match s {
        Some(s) => format!("'{}'", s.replace('\'', r"'\''")),
        None => "''".to_string(),
    }
}

/// Build a shell command line running `program` with `args`, each quoted.
///
/// ```rust
/// use agent_locator::command_line;
/// use std::path::Path;
///
/// let line = command_line(Path::new("/opt/my tools/cursor-agent"), &["--resume", "it's"]);
/// assert_eq!(line, r"'/opt/my tools/cursor-agent' '--resume' 'it'\''s'");
/// ```
pub fn command_line(program: &Path, args: &[&str]) -> String {
    let program = program.to_string_lossy();
    std::iter::once(shell_quote(Some(&program)))
        .chain(args.iter().map(|arg| shell_quote(Some(arg))))
        .collect::<Vec<_>>()
        .join(" ")
}
