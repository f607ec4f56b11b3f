//! Structural validation of command trees.
//!
//! The suggestion engine assumes candidate sets are duplicate-free and
//! that every definition carries a usable name. Validation checks those
//! assumptions once, at definition time, instead of every suggestion
//! request: empty names, duplicate flag names within a scope (aliases and
//! synthesized `no-` forms included), duplicate subcommand names, and
//! subcommand cycles.
//!
//! # Examples
//!
//! ```
//! use arg_suggest_core::*;
//!
//! let root = CommandDef::new("app")
//!     .with_flag(FlagDef::boolean("verbose").with_alias("v"))
//!     .with_subcommand(CommandDef::new("config"));
//! assert!(validate_command(&root).is_empty());
//!
//! // Alias collides with another flag's canonical name.
//! let bad = CommandDef::new("app")
//!     .with_flag(FlagDef::boolean("verbose"))
//!     .with_flag(FlagDef::boolean("version").with_alias("verbose"));
//! assert!(!validate_command(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{CommandDef, FlagDef};

/// Command-tree validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Flag canonical name or alias is empty.
    #[error("flag name cannot be empty")]
    EmptyFlagName,
    /// Two flags in the same scope share a name (directly, via an alias,
    /// or via a synthesized `no-` form).
    #[error("duplicate flag name in scope: {0}")]
    DuplicateFlagName(String),
    /// Two subcommands in the same scope share a name or alias.
    #[error("duplicate subcommand in scope: {0}")]
    DuplicateSubcommand(String),
    /// A subcommand path repeats an ancestor name (e.g. `git remote git`).
    #[error("subcommand cycle detected at path: {0}")]
    SubcommandCycle(String),
}

/// Validates a command tree rooted at `command`.
///
/// Returns all problems found, or an empty vector for a valid tree.
/// Validation stops descending below the first problem in any scope so a
/// single structural mistake is not reported once per level.
///
/// # Examples
///
/// ```
/// use arg_suggest_core::*;
///
/// // Cycle: app → remote → app
/// let mut remote = CommandDef::new("remote");
/// remote.subcommands.push(CommandDef::new("app"));
/// let root = CommandDef::new("app").with_subcommand(remote);
///
/// let errors = validate_command(&root);
/// assert_eq!(
///     errors,
///     vec![ValidationError::SubcommandCycle("app remote app".to_string())]
/// );
/// ```
pub fn validate_command(command: &CommandDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if command.name.trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName);
        return errors;
    }

    errors.extend(validate_flags(&command.flags));
    if !errors.is_empty() {
        return errors;
    }

    let mut path = vec![command.name.clone()];
    errors.extend(validate_subcommands(&command.subcommands, &mut path));

    errors
}

fn validate_subcommands(
    subcommands: &[CommandDef],
    path: &mut Vec<String>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for sub in subcommands {
        let name = sub.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyCommandName);
            return errors;
        }

        for candidate in sub.names() {
            if !seen.insert(candidate) {
                errors.push(ValidationError::DuplicateSubcommand(candidate.to_string()));
                return errors;
            }
        }

        if path.iter().any(|segment| segment == name) {
            let cycle_path = path
                .iter()
                .cloned()
                .chain(std::iter::once(name.to_string()))
                .collect::<Vec<_>>()
                .join(" ");
            errors.push(ValidationError::SubcommandCycle(cycle_path));
            return errors;
        }

        errors.extend(validate_flags(&sub.flags));
        if !errors.is_empty() {
            return errors;
        }

        path.push(name.to_string());
        errors.extend(validate_subcommands(&sub.subcommands, path));
        path.pop();
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

fn validate_flags(flags: &[FlagDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for flag in flags {
        for name in flag.names() {
            if name.trim().is_empty() {
                errors.push(ValidationError::EmptyFlagName);
                return errors;
            }
            if !seen.insert(name.to_string()) {
                errors.push(ValidationError::DuplicateFlagName(name.to_string()));
                return errors;
            }
        }
        // The negated form is a real candidate name, so it can collide
        // with a literal `no-` flag declared in the same scope.
        if flag.kind.is_negatable() {
            let negated = format!("no-{}", flag.name);
            if !seen.insert(negated.clone()) {
                errors.push(ValidationError::DuplicateFlagName(negated));
                return errors;
            }
        }
    }

    errors
}
