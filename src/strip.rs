use regex::Regex;

lazy_static! {
    /// An optional newline, the start of a line and every space, tab, form
    /// feed, carriage return or newline after it. Newlines count as whitespace, so runs of blank
    /// lines are swallowed by a single match.
    static ref INSIGNIFICANT_WHITESPACE: Regex =
        Regex::new(r"(?m)\n?^[\t\n\x0C\r ]*").unwrap();
}

/// Removes indentation and line breaks from sparse template text.
///
/// Every newline is dropped together with the whitespace that starts the next
/// line. Whitespace at the very beginning of the text counts as indentation too.
/// Whitespace that has to end up in the output must be printed explicitly, e.g.
/// `{{" "}}` or `{{"\n"}}`.
///
/// # Example
/// ```
/// use gtmpl_sparse::strip;
///
/// let text = "
///     Some list:{{\"\\n\"}}
///
///     {{range .}}
///         ## {{.}}{{\"\\n\"}}
///     {{end}}
/// ";
/// assert_eq!(
///     strip(text),
///     r#"Some list:{{"\n"}}{{range .}}# {{.}}{{"\n"}}{{end}}"#
/// );
/// ```
pub fn strip(text: &str) -> String {
    INSIGNIFICANT_WHITESPACE.replace_all(text, "").into_owned()
}

/// Returns `true` if `strip` would leave `text` untouched.
pub fn is_stripped(text: &str) -> bool {
    INSIGNIFICANT_WHITESPACE
        .find_iter(text)
        .all(|m| m.as_str().is_empty())
}
