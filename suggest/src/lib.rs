//! Did-you-mean suggestion engine for mistyped CLI flags and commands.
//!
//! When argument parsing rejects a flag or subcommand name, this crate
//! proposes the single closest valid alternative instead of leaving the
//! user with a bare "unknown flag" error:
//!
//! - [`best_match`] — case-insensitive similarity ranking over an ordered
//!   candidate list.
//! - [`flag_names`] / [`command_names`] — candidate collection from
//!   [`arg_suggest_core`] definitions (visibility filtering, aliases,
//!   negated boolean forms).
//! - [`suggest_flag`] / [`suggest_command`] — collection + ranking for
//!   one scope, with display dash-prefixing for flags.
//! - [`suggest_flag_from_error`] — the integration layer: extract the
//!   rejected token from parser error text, resolve the command scope,
//!   and format the message ([`format_suggestion`]).
//!
//! Everything is synchronous and side-effect-free: each call reads
//! immutable definitions and allocates its result, so concurrent use
//! needs no synchronization. Absence of a suggestion is an expected
//! outcome ([`SuggestError`]), never a panic.
//!
//! # Example
//!
//! ```
//! use arg_suggest::suggest_flag_from_error;
//! use arg_suggest_core::{CommandDef, FlagDef, FlagKind};
//!
//! let root = CommandDef::new("greet")
//!     .with_flag(FlagDef::new("name", FlagKind::String).with_description("a name to say"));
//!
//! let message =
//!     suggest_flag_from_error(&root, "flag provided but not defined: -nema", "")
//!         .unwrap();
//! assert_eq!(message, "Did you mean \"--name\"?\n\n");
//! ```

mod collect;
mod format;
mod matcher;
mod resolver;

pub use collect::{command_names, flag_names};
pub use format::format_suggestion;
pub use matcher::best_match;
pub use resolver::{
    SuggestError, UNDEFINED_FLAG_PREFIX, suggest_command, suggest_flag, suggest_flag_from_error,
};
