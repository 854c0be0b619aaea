//! Inno Setup quoting and escaping helpers.

/// Quote a parameter value, doubling embedded quotes.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Escape `{` so Inno Setup does not read it as the start of a constant.
pub fn escape_constants(value: &str) -> String {
    value.replace('{', "{{")
}

/// Collapse line breaks so a value fits on a single directive line.
pub fn single_line(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape an argument of a `{cm:...}` constant.
///
/// `&` is doubled so the wizard shows it literally instead of as an
/// accelerator; `%`, `,` and `}` are percent-encoded as the constant requires.
pub fn custom_message_arg(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&&"),
            '%' => escaped.push_str("%25"),
            ',' => escaped.push_str("%2c"),
            '}' => escaped.push_str("%7d"),
            '{' => escaped.push_str("{{"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Join launch arguments into a `Parameters:` value.
///
/// Arguments containing whitespace are wrapped in quotes, which are doubled
/// once the whole value is quoted.
pub fn join_arguments(args: &[String]) -> String {
    args.iter()
        .map(|arg| {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                format!("\"{}\"", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_doubles_quotes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_custom_message_arg() {
        assert_eq!(custom_message_arg("Tom & Jerry"), "Tom && Jerry");
        assert_eq!(custom_message_arg("A, B"), "A%2c B");
        assert_eq!(custom_message_arg("100%"), "100%25");
    }

    #[test]
    fn test_join_arguments() {
        let args = vec!["--mode".to_string(), "first run".to_string()];
        assert_eq!(join_arguments(&args), "--mode \"first run\"");
        assert_eq!(quote(&join_arguments(&args)), "\"--mode \"\"first run\"\"\"");
        assert_eq!(join_arguments(&[]), "");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("first\r\n  second\n\n"), "first second");
    }

    #[test]
    fn test_escape_constants() {
        assert_eq!(escape_constants("My {App}"), "My {{App}");
    }
}
