//! Candidate-name collection from flag and command definitions.
//!
//! Collectors flatten definitions into the ordered list of bare names
//! eligible for suggestion. Order is part of the contract — it drives the
//! matcher's tie-break — and follows declaration order, with a flag's
//! canonical name before its aliases and any synthesized negated form
//! last.

use std::collections::HashSet;

use arg_suggest_core::{CommandDef, FlagDef};

/// Collects the suggestion candidates exposed by `flags`.
///
/// Hidden flags contribute nothing. When `exclude_help` is set, every
/// name of the reserved help flag is dropped as well, so a command with
/// help disabled never produces a "did you mean --help" suggestion.
/// Negatable flags additionally contribute their `no-<name>` form.
/// Duplicates are dropped, first occurrence wins.
///
/// # Examples
///
/// ```
/// use arg_suggest::flag_names;
/// use arg_suggest_core::{FlagDef, FlagKind};
///
/// let flags = vec![
///     FlagDef::boolean("color").with_alias("c"),
///     FlagDef::new("socket", FlagKind::String).with_alias("s"),
///     FlagDef::boolean("help").with_alias("h"),
/// ];
///
/// assert_eq!(
///     flag_names(&flags, false),
///     vec!["color", "c", "no-color", "socket", "s", "help", "h", "no-help"],
/// );
/// assert_eq!(
///     flag_names(&flags, true),
///     vec!["color", "c", "no-color", "socket", "s"],
/// );
/// ```
pub fn flag_names(flags: &[FlagDef], exclude_help: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for flag in flags {
        if flag.hidden || (exclude_help && flag.is_help()) {
            continue;
        }
        for name in flag.names() {
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
        if flag.kind.is_negatable() {
            let negated = format!("no-{}", flag.name);
            if seen.insert(negated.clone()) {
                names.push(negated);
            }
        }
    }

    names
}

/// Collects the suggestion candidates exposed by `commands`.
///
/// Each visible command contributes its canonical name and aliases, in
/// declaration order; hidden commands contribute nothing. Duplicates are
/// dropped, first occurrence wins.
///
/// # Examples
///
/// ```
/// use arg_suggest::command_names;
/// use arg_suggest_core::CommandDef;
///
/// let commands = vec![
///     CommandDef::new("config").with_alias("cfg"),
///     CommandDef::new("info").with_alias("i"),
///     CommandDef::new("debug-dump").hidden(),
/// ];
///
/// assert_eq!(command_names(&commands), vec!["config", "cfg", "info", "i"]);
/// ```
pub fn command_names(commands: &[CommandDef]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for command in commands {
        if command.hidden {
            continue;
        }
        for name in command.names() {
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
    }

    names
}
