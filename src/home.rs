//! Home directory expansion for user-supplied paths.

use std::path::MAIN_SEPARATOR;

/// Expand a leading `~` to the current user's home directory.
///
/// Only `~` on its own and `~` followed directly by the platform path
/// separator are expanded. `~user/...` and `~` elsewhere in the string are
/// left alone. `None` stays `None`. If the home directory cannot be
/// determined the input is returned unchanged.
///
/// # Example
///
/// ```rust
/// use agent_locator::expand_home;
///
/// assert_eq!(expand_home(Some("/opt/bin/tool")), Some("/opt/bin/tool".to_string()));
/// assert_eq!(expand_home(None), None);
/// ```
pub fn expand_home(path: Option<&str>) -> Option<String> {
    let path = path?;
    let Some(home) = dirs::home_dir() else {
        return Some(path.to_string());
    };
    Some(expand_with(path, &home.to_string_lossy()))
}

fn expand_with(path: &str, home: &str) -> String {
    if path == "~" {
        return home.to_string();
    }
    match path.strip_prefix('~') {
        Some(rest) if rest.starts_with(MAIN_SEPARATOR) => format!("{home}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep(parts: &[&str]) -> String {
        parts.join(&MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_bare_tilde_is_home() {
        assert_eq!(expand_with("~", "/home/u"), "/home/u");
    }

    #[test]
    fn test_tilde_slash_prefix() {
        let input = sep(&["~", ".local", "bin", "cursor-agent"]);
        let expected = format!("/home/u{}", &input[1..]);
        assert_eq!(expand_with(&input, "/home/u"), expected);
    }

    #[test]
    fn test_absolute_path_unchanged() {
        assert_eq!(expand_with("/abs/path", "/home/u"), "/abs/path");
    }

    #[test]
    fn test_other_tilde_forms_unchanged() {
        assert_eq!(expand_with("~other/bin", "/home/u"), "~other/bin");
        assert_eq!(expand_with("bin/~", "/home/u"), "bin/~");
        assert_eq!(expand_with("", "/home/u"), "");
    }

    #[test]
    fn test_only_first_tilde_replaced() {
        let input = sep(&["~", "a~b"]);
        let expected = format!("/home/u{}", &input[1..]);
        assert_eq!(expand_with(&input, "/home/u"), expected);
    }

    #[test]
    fn test_expand_home_uses_real_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let home = home.to_string_lossy().to_string();

        assert_eq!(expand_home(Some("~")), Some(home.clone()));

        let input = sep(&["~", "x"]);
        assert_eq!(
            expand_home(Some(&input)),
            Some(format!("{home}{MAIN_SEPARATOR}x"))
        );
    }

    #[test]
    fn test_expand_home_none() {
        assert_eq!(expand_home(None), None);
    }
}
