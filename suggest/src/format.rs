//! Rendering of a selected suggestion into the user-facing message.

/// Formats a suggestion for display.
///
/// `None` renders as the empty string — the caller falls back to showing
/// the plain parse error. `Some(name)` renders as
/// `Did you mean "<name>"?` followed by a blank line. The exact text is a
/// presentation contract: the surrounding error renderer splices it
/// between the original error and the help text, and tests assert on it
/// verbatim.
///
/// # Examples
///
/// ```
/// use arg_suggest::format_suggestion;
///
/// assert_eq!(format_suggestion(Some("--name")), "Did you mean \"--name\"?\n\n");
/// assert_eq!(format_suggestion(None), "");
/// ```
pub fn format_suggestion(suggestion: Option<&str>) -> String {
    match suggestion {
        Some(name) => format!("Did you mean \"{name}\"?\n\n"),
        None => String::new(),
    }
}
