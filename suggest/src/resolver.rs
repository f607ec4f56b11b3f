//! High-level suggesters and the parse-error integration layer.
//!
//! [`suggest_flag`] and [`suggest_command`] wrap candidate collection and
//! ranking for a single scope. [`suggest_flag_from_error`] is the entry
//! point the error renderer calls after a parse failure: it extracts the
//! rejected token from the underlying error text, resolves the command
//! scope the error occurred in, and returns the formatted suggestion
//! message, or a [`SuggestError`] describing why none could be produced.

use arg_suggest_core::{CommandDef, FlagDef};
use thiserror::Error;
use tracing::debug;

use crate::collect::{command_names, flag_names};
use crate::format::format_suggestion;
use crate::matcher::best_match;

/// Marker the underlying argument parser emits for an undefined flag.
///
/// The rejected token is the remainder of the line after this literal
/// (the trailing `-` belongs to the marker, so the token is bare).
/// Versioned boundary contract: the enclosing parser's error text must
/// keep this exact shape for resolution to work.
pub const UNDEFINED_FLAG_PREFIX: &str = "flag provided but not defined: -";

/// Why no suggestion message could be produced.
///
/// All variants are recoverable: the caller falls back to displaying the
/// original parse error unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// The error text does not carry [`UNDEFINED_FLAG_PREFIX`].
    #[error("error text is not an undefined-flag report: {0}")]
    UnrecognizedFormat(String),
    /// The command scope does not resolve in the command tree.
    #[error("unknown command scope: {0:?}")]
    UnknownScope(String),
    /// The token was empty or too dissimilar from every candidate.
    #[error("no candidate is close enough to suggest")]
    NoSuggestion,
}

/// Suggests the closest flag name for a mistyped token, dash-prefixed for
/// display.
///
/// Candidates come from [`flag_names`](crate::flag_names) (declared
/// order, hidden flags dropped, help names dropped when `exclude_help`).
/// The winner is rendered the way a user would type it: `-x` for a
/// single-character name, `--name` otherwise.
///
/// # Examples
///
/// ```
/// use arg_suggest::suggest_flag;
/// use arg_suggest_core::{FlagDef, FlagKind};
///
/// let flags = vec![
///     FlagDef::boolean("another-flag"),
///     FlagDef::new("socket", FlagKind::String).with_alias("s"),
/// ];
///
/// assert_eq!(suggest_flag(&flags, "a", false), Some("--another-flag".into()));
/// assert_eq!(suggest_flag(&flags, "s", false), Some("-s".into()));
/// assert_eq!(suggest_flag(&flags, "q", false), None);
/// ```
pub fn suggest_flag(flags: &[FlagDef], provided: &str, exclude_help: bool) -> Option<String> {
    let names = flag_names(flags, exclude_help);
    best_match(names.iter().map(String::as_str), provided).map(dashed)
}

/// Suggests the closest subcommand name for a mistyped token.
///
/// Command names are returned bare; unlike flags they carry no dash
/// prefix. An alias can win over a canonical name when it is the closer
/// string.
///
/// # Examples
///
/// ```
/// use arg_suggest::suggest_command;
/// use arg_suggest_core::CommandDef;
///
/// let commands = vec![
///     CommandDef::new("config"),
///     CommandDef::new("info").with_alias("i"),
/// ];
///
/// assert_eq!(suggest_command(&commands, "conf"), Some("config".into()));
/// assert_eq!(suggest_command(&commands, "i"), Some("i".into()));
/// assert_eq!(suggest_command(&commands, ""), None);
/// ```
pub fn suggest_command(commands: &[CommandDef], provided: &str) -> Option<String> {
    let names = command_names(commands);
    best_match(names.iter().map(String::as_str), provided).map(str::to_string)
}

/// Builds a suggestion message from a failed parse.
///
/// `error_text` must contain [`UNDEFINED_FLAG_PREFIX`] on some line; the
/// rejected token is the remainder of that line. `scope` names the
/// command the parse failed in: empty for the root, otherwise
/// whitespace-joined subcommand segments resolved by exact name/alias
/// from `root`. Help suggestions are suppressed when any command on the
/// resolved path (root included) hides help.
///
/// On success, returns the message produced by
/// [`format_suggestion`](crate::format_suggestion). The function never
/// writes anywhere itself; displaying the message is the caller's job.
///
/// # Errors
///
/// - [`SuggestError::UnrecognizedFormat`] — no line carries the marker;
///   the caller should show the raw error unmodified.
/// - [`SuggestError::UnknownScope`] — a scope segment does not resolve.
/// - [`SuggestError::NoSuggestion`] — the token is empty or too
///   dissimilar from every candidate.
///
/// # Examples
///
/// ```
/// use arg_suggest::suggest_flag_from_error;
/// use arg_suggest_core::{CommandDef, FlagDef, FlagKind};
///
/// let root = CommandDef::new("greet")
///     .with_flag(FlagDef::new("name", FlagKind::String));
///
/// let message =
///     suggest_flag_from_error(&root, "flag provided but not defined: -nema", "")
///         .unwrap();
/// assert_eq!(message, "Did you mean \"--name\"?\n\n");
/// ```
pub fn suggest_flag_from_error(
    root: &CommandDef,
    error_text: &str,
    scope: &str,
) -> Result<String, SuggestError> {
    let token = flag_token_from_error(error_text)?;

    let mut command = root;
    let mut exclude_help = root.hide_help;
    for segment in scope.split_whitespace() {
        command = command
            .find_subcommand(segment)
            .ok_or_else(|| SuggestError::UnknownScope(scope.to_string()))?;
        exclude_help |= command.hide_help;
    }
    debug!(token, scope, command = %command.name, "resolved suggestion scope");

    let suggestion =
        suggest_flag(&command.flags, token, exclude_help).ok_or(SuggestError::NoSuggestion)?;
    debug!(%suggestion, "flag suggestion selected");

    Ok(format_suggestion(Some(&suggestion)))
}

/// Extracts the rejected flag token from parser error text.
///
/// Scans lines for [`UNDEFINED_FLAG_PREFIX`] so wrapped messages (e.g.
/// `Incorrect Usage: flag provided but not defined: -x`) still resolve.
fn flag_token_from_error(error_text: &str) -> Result<&str, SuggestError> {
    error_text
        .lines()
        .find_map(|line| {
            line.find(UNDEFINED_FLAG_PREFIX)
                .map(|idx| &line[idx + UNDEFINED_FLAG_PREFIX.len()..])
        })
        .ok_or_else(|| SuggestError::UnrecognizedFormat(error_text.to_string()))
}

fn dashed(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}
