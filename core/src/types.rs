//! Definition types for flags and commands.
//!
//! This module defines the immutable model the suggestion engine reads:
//! flags with canonical names and aliases, and commands arranged in an
//! owned tree of subcommands. The types derive [`serde`] traits so a
//! command tree can be loaded from JSON (e.g. by the `suggest-check`
//! developer tool).
//!
//! Names are stored *bare*, without leading dashes: `"verbose"`, not
//! `"--verbose"`. Whether a suggestion is rendered with one dash or two
//! is a presentation decision made from the matched name's length, not
//! part of the model.

use serde::{Deserialize, Serialize};

/// Canonical name of the reserved help flag.
///
/// A flag whose canonical name equals this constant is treated as the
/// help flag for candidate-collection purposes: callers can suppress it
/// (and all of its aliases) when help is disabled for a command.
pub const HELP_FLAG_NAME: &str = "help";

/// Value kind of a flag.
///
/// A closed set of variants; the suggestion engine only cares about one
/// capability, [`is_negatable`](FlagKind::is_negatable), which controls
/// whether a `no-<name>` form is synthesized as a candidate.
///
/// # Examples
///
/// ```
/// use arg_suggest_core::FlagKind;
///
/// assert!(FlagKind::Bool.is_negatable());
/// assert!(!FlagKind::String.is_negatable());
/// assert_eq!(FlagKind::default(), FlagKind::Any);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FlagKind {
    /// Boolean flag (takes no value).
    Bool,
    /// String value.
    String,
    /// Numeric value.
    Number,
    /// Filesystem path.
    Path,
    /// Unknown/any value (the default).
    #[default]
    Any,
}

impl FlagKind {
    /// Whether flags of this kind accept a synthesized negated form
    /// (`--verbose` implying `--no-verbose`). Only boolean flags do.
    pub fn is_negatable(self) -> bool {
        matches!(self, FlagKind::Bool)
    }
}

/// Definition of a single flag.
///
/// A flag exposes one canonical name and zero or more aliases, all bare
/// (no dashes). Use the constructors [`boolean`](FlagDef::boolean) and
/// [`new`](FlagDef::new), then chain builder methods.
///
/// # Examples
///
/// ```
/// use arg_suggest_core::{FlagDef, FlagKind};
///
/// let socket = FlagDef::new("socket", FlagKind::String).with_alias("s");
/// assert_eq!(socket.names().collect::<Vec<_>>(), vec!["socket", "s"]);
/// assert!(socket.matches("s"));
/// assert!(!socket.matches("sock"));
///
/// let verbose = FlagDef::boolean("verbose").hidden();
/// assert!(verbose.hidden);
/// assert!(verbose.kind.is_negatable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagDef {
    /// Canonical name, without dashes (e.g. `"verbose"`).
    pub name: String,
    /// Alternate names, in declared order.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Value kind.
    #[serde(default)]
    pub kind: FlagKind,
    /// Hidden flags never appear in suggestion candidate sets.
    #[serde(default)]
    pub hidden: bool,
    /// Usage text, if any.
    #[serde(default)]
    pub description: Option<String>,
}

impl FlagDef {
    /// Creates a flag of the given kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_suggest_core::{FlagDef, FlagKind};
    ///
    /// let flag = FlagDef::new("output", FlagKind::Path);
    /// assert_eq!(flag.name, "output");
    /// assert!(flag.aliases.is_empty());
    /// ```
    pub fn new(name: &str, kind: FlagKind) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            kind,
            hidden: false,
            description: None,
        }
    }

    /// Creates a boolean flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_suggest_core::{FlagDef, FlagKind};
    ///
    /// let flag = FlagDef::boolean("color");
    /// assert_eq!(flag.kind, FlagKind::Bool);
    /// ```
    pub fn boolean(name: &str) -> Self {
        Self::new(name, FlagKind::Bool)
    }

    /// Adds an alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Adds a usage description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Marks the flag as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// All names of this flag: canonical first, then aliases in declared
    /// order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Checks whether `s` is the canonical name or an alias.
    pub fn matches(&self, s: &str) -> bool {
        self.names().any(|name| name == s)
    }

    /// Whether this is the reserved help flag (see [`HELP_FLAG_NAME`]).
    pub fn is_help(&self) -> bool {
        self.name == HELP_FLAG_NAME
    }
}

/// Definition of a command and its nested subcommands.
///
/// The root command owns its subcommand records by value, forming an
/// explicit tree that is traversed by exact name/alias lookup — there is
/// no ambient registry.
///
/// # Examples
///
/// ```
/// use arg_suggest_core::{CommandDef, FlagDef};
///
/// let root = CommandDef::new("git")
///     .with_flag(FlagDef::boolean("verbose"))
///     .with_subcommand(
///         CommandDef::new("remote")
///             .with_subcommand(CommandDef::new("add").with_alias("a")),
///     );
///
/// assert_eq!(root.resolve_path("remote add").unwrap().name, "add");
/// assert_eq!(root.resolve_path("remote a").unwrap().name, "add");
/// assert_eq!(root.resolve_path("").unwrap().name, "git");
/// assert!(root.resolve_path("remote rm").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDef {
    /// Canonical command name.
    pub name: String,
    /// Alternate names, in declared order.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Flags recognized by this command, in declared order.
    #[serde(default)]
    pub flags: Vec<FlagDef>,
    /// Nested subcommands, in declared order.
    #[serde(default)]
    pub subcommands: Vec<CommandDef>,
    /// Hidden commands never appear in suggestion candidate sets.
    #[serde(default)]
    pub hidden: bool,
    /// Suppresses help-flag suggestions for this command and its subtree.
    #[serde(default)]
    pub hide_help: bool,
}

impl CommandDef {
    /// Creates a command with the given name.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_suggest_core::CommandDef;
    ///
    /// let cmd = CommandDef::new("serve");
    /// assert_eq!(cmd.name, "serve");
    /// assert!(cmd.subcommands.is_empty());
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Adds an alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Adds a short description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a flag.
    pub fn with_flag(mut self, flag: FlagDef) -> Self {
        self.flags.push(flag);
        self
    }

    /// Adds a subcommand.
    pub fn with_subcommand(mut self, sub: CommandDef) -> Self {
        self.subcommands.push(sub);
        self
    }

    /// Marks the command as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Suppresses help suggestions for this command's scope.
    pub fn hide_help(mut self) -> Self {
        self.hide_help = true;
        self
    }

    /// All names of this command: canonical first, then aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Checks whether `s` is the canonical name or an alias.
    pub fn matches(&self, s: &str) -> bool {
        self.names().any(|name| name == s)
    }

    /// Looks up a direct subcommand by exact name or alias.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_suggest_core::CommandDef;
    ///
    /// let root = CommandDef::new("app")
    ///     .with_subcommand(CommandDef::new("config").with_alias("cfg"));
    ///
    /// assert!(root.find_subcommand("cfg").is_some());
    /// assert!(root.find_subcommand("conf").is_none());
    /// ```
    pub fn find_subcommand(&self, name: &str) -> Option<&CommandDef> {
        self.subcommands.iter().find(|sub| sub.matches(name))
    }

    /// Resolves a whitespace-joined path of subcommand names, starting at
    /// this command.
    ///
    /// An empty (or all-whitespace) path resolves to `self`. Each segment
    /// must match a subcommand by exact name or alias; any missing
    /// segment makes the whole resolution fail.
    pub fn resolve_path(&self, path: &str) -> Option<&CommandDef> {
        let mut current = self;
        for segment in path.split_whitespace() {
            current = current.find_subcommand(segment)?;
        }
        Some(current)
    }
}
