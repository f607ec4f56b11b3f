//! End-to-end suggestion scenarios over a realistic command tree.

use arg_suggest::{
    SuggestError, suggest_command, suggest_flag, suggest_flag_from_error,
};
use arg_suggest_core::{CommandDef, FlagDef, FlagKind, validate_command};

/// A command tree exercising every candidate source: aliases,
/// single-character names, negatable booleans, hidden definitions, and a
/// nested scope with its own flags.
fn fish_command() -> CommandDef {
    CommandDef::new("fish")
        .with_flag(FlagDef::boolean("fl"))
        .with_flag(FlagDef::boolean("another-flag"))
        .with_flag(FlagDef::new("socket", FlagKind::String).with_alias("s"))
        .with_flag(FlagDef::boolean("kelp").hidden())
        .with_flag(FlagDef::boolean("help").with_alias("h"))
        .with_subcommand(
            CommandDef::new("config")
                .with_flag(FlagDef::boolean("another-flag"))
                .with_flag(FlagDef::boolean("help").with_alias("h")),
        )
        .with_subcommand(CommandDef::new("info").with_alias("i"))
        .with_subcommand(CommandDef::new("internal").hidden())
}

#[test]
fn test_fixture_is_structurally_valid() {
    assert!(validate_command(&fish_command()).is_empty());
}

#[test]
fn test_suggest_flag_scenarios() {
    let app = fish_command();

    for (provided, expected) in [
        ("", None),
        ("a", Some("--another-flag")),
        ("hlp", Some("--help")),
        ("k", None),
        ("s", Some("-s")),
    ] {
        assert_eq!(
            suggest_flag(&app.flags, provided, false).as_deref(),
            expected,
            "input {provided:?}"
        );
    }
}

#[test]
fn test_suggest_flag_hide_help() {
    let app = fish_command();

    // With help suppressed the closest remaining candidate wins, even
    // though "help" itself is the best string match.
    assert_eq!(
        suggest_flag(&app.flags, "hlp", true).as_deref(),
        Some("--fl")
    );
}

#[test]
fn test_hidden_flag_is_never_suggested() {
    let app = fish_command();

    // "kelp" would be the obvious match for "k" if it were visible.
    assert_eq!(suggest_flag(&app.flags, "k", false), None);
    // Even typing the hidden name exactly falls through to the closest
    // visible candidate.
    assert_eq!(
        suggest_flag(&app.flags, "kelp", false).as_deref(),
        Some("--help")
    );
}

#[test]
fn test_suggest_command_scenarios() {
    let app = fish_command();

    for (provided, expected) in [
        ("", None),
        ("conf", Some("config")),
        ("i", Some("i")),
        ("information", Some("info")),
        ("inf", Some("info")),
        ("con", Some("config")),
        // Purely distance-based: unrelated input still gets the closest
        // candidate, not nothing.
        ("not-existing", Some("info")),
    ] {
        assert_eq!(
            suggest_command(&app.subcommands, provided).as_deref(),
            expected,
            "input {provided:?}"
        );
    }
}

#[test]
fn test_hidden_command_is_never_suggested() {
    let app = fish_command();
    assert_eq!(
        suggest_command(&app.subcommands, "internal").as_deref(),
        Some("i")
    );
}

#[test]
fn test_suggest_flag_from_error_scenarios() {
    let app = fish_command();

    for (scope, provided, expected) in [
        ("", "hel", "--help"),
        ("", "soccer", "--socket"),
        ("config", "anot", "--another-flag"),
    ] {
        let message = suggest_flag_from_error(
            &app,
            &format!("flag provided but not defined: -{provided}"),
            scope,
        )
        .unwrap();
        assert_eq!(
            message,
            format!("Did you mean \"{expected}\"?\n\n"),
            "scope {scope:?}, input {provided:?}"
        );
    }
}

#[test]
fn test_suggest_flag_from_error_failure_taxonomy() {
    let app = fish_command();

    assert!(matches!(
        suggest_flag_from_error(&app, "invalid", "").unwrap_err(),
        SuggestError::UnrecognizedFormat(_)
    ));

    assert_eq!(
        suggest_flag_from_error(&app, "flag provided but not defined: -flag", "invalid")
            .unwrap_err(),
        SuggestError::UnknownScope("invalid".to_string())
    );

    assert_eq!(
        suggest_flag_from_error(&app, "flag provided but not defined: -", "").unwrap_err(),
        SuggestError::NoSuggestion
    );
}
