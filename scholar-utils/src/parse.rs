use crate::pagination::NavTarget;

/// Split a console line into a lower-cased command word and the trimmed rest.
///
/// Returns `None` for blank lines.
pub fn split_command(line: &str) -> Option<(String, Option<&str>)> {
    let content = line.trim();
    if content.is_empty() {
        return None;
    }

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let command = command_and_rest.next()?.to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    Some((command, rest))
}

/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}

/// Parse a navigation command (`next`, `prev`, `first`, `last`, `page <n>`).
///
/// Only `page` takes an argument; `next steps` is not a navigation command.
pub fn parse_nav_target(command: &str, arg: Option<&str>) -> Option<NavTarget> {
    match (command, arg) {
        ("next" | "n", None) => Some(NavTarget::Next),
        ("prev" | "previous" | "p", None) => Some(NavTarget::Prev),
        ("first", None) => Some(NavTarget::First),
        ("last", None) => Some(NavTarget::Last),
        ("page" | "goto", _) => arg
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .map(NavTarget::Page),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_command_lowercases_and_trims() {
        assert_eq!(
            split_command("  SEARCH   deep learning  "),
            Some(("search".to_owned(), Some("deep learning")))
        );
        assert_eq!(split_command("next"), Some(("next".to_owned(), None)));
        assert_eq!(split_command("   "), None);
    }

    #[test]
    fn one_based_page_rejects_zero_and_garbage() {
        assert_eq!(parse_one_based_page(None), Some(1));
        assert_eq!(parse_one_based_page(Some("4")), Some(4));
        assert_eq!(parse_one_based_page(Some("0")), None);
        assert_eq!(parse_one_based_page(Some("two")), None);
    }

    #[test]
    fn nav_targets_parse_from_command_words() {
        assert_eq!(parse_nav_target("n", None), Some(NavTarget::Next));
        assert_eq!(parse_nav_target("previous", None), Some(NavTarget::Prev));
        assert_eq!(parse_nav_target("page", Some("12")), Some(NavTarget::Page(12)));
        // Page zero parses; the engine decides it is out of range.
        assert_eq!(parse_nav_target("page", Some("0")), Some(NavTarget::Page(0)));
        assert_eq!(parse_nav_target("page", Some("x")), None);
        assert_eq!(parse_nav_target("page", None), None);
        assert_eq!(parse_nav_target("search", None), None);
        assert_eq!(parse_nav_target("next", Some("steps in policy")), None);
    }
}
