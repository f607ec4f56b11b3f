//! Flag and command definition model for did-you-mean suggestions.
//!
//! This crate defines the immutable definitions a suggestion engine
//! matches mistyped input against:
//!
//! - [`FlagDef`] — a flag with a canonical name, aliases, a value
//!   [`FlagKind`], and visibility.
//! - [`CommandDef`] — a command with flags, aliases, and an owned tree of
//!   nested subcommands, looked up by exact name/alias path
//!   ([`CommandDef::resolve_path`]).
//! - [`validate_command`] — structural validation (empty names, duplicate
//!   names within a scope, subcommand cycles) so candidate sets derived
//!   from a valid tree are guaranteed duplicate-free.
//!
//! The ranking and error-integration layers live in the `arg-suggest`
//! crate; this one is purely the data model.
//!
//! # Example
//!
//! ```
//! use arg_suggest_core::*;
//!
//! let root = CommandDef::new("greet")
//!     .with_flag(FlagDef::new("name", FlagKind::String))
//!     .with_subcommand(
//!         CommandDef::new("neighbors").with_flag(FlagDef::boolean("smiling")),
//!     );
//!
//! assert!(validate_command(&root).is_empty());
//! assert_eq!(root.resolve_path("neighbors").unwrap().name, "neighbors");
//! ```

mod types;
mod validate;

pub use types::{CommandDef, FlagDef, FlagKind, HELP_FLAG_NAME};
pub use validate::{ValidationError, validate_command};
