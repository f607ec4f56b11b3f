//! `suggest-check` — probe the suggestion engine against a command tree.
//!
//! Loads a [`CommandDef`] tree from a JSON file and runs the engine's
//! entry points against it, so suggestion behavior can be inspected
//! without wiring up a full argument parser. Set `RUST_LOG=debug` to see
//! the engine's resolution traces.

use std::fs;
use std::path::PathBuf;

use arg_suggest::{suggest_command, suggest_flag, suggest_flag_from_error};
use arg_suggest_core::{CommandDef, validate_command};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "suggest-check")]
#[command(about = "Probe did-you-mean suggestions against a command tree JSON file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest the closest flag name for a mistyped token.
    Flag(FlagArgs),
    /// Suggest the closest subcommand name for a mistyped token.
    Command(CommandArgs),
    /// Resolve a raw parser error message into a suggestion.
    FromError(FromErrorArgs),
}

#[derive(Debug, Args)]
struct FlagArgs {
    /// Path to the command tree JSON file.
    #[arg(long)]
    schema: PathBuf,
    /// Subcommand scope to suggest within (space-separated; empty = root).
    #[arg(long, default_value = "")]
    scope: String,
    /// The mistyped token, without dashes.
    input: String,
    /// Suppress help-flag suggestions.
    #[arg(long)]
    hide_help: bool,
}

#[derive(Debug, Args)]
struct CommandArgs {
    /// Path to the command tree JSON file.
    #[arg(long)]
    schema: PathBuf,
    /// Subcommand scope to suggest within (space-separated; empty = root).
    #[arg(long, default_value = "")]
    scope: String,
    /// The mistyped subcommand name.
    input: String,
}

#[derive(Debug, Args)]
struct FromErrorArgs {
    /// Path to the command tree JSON file.
    #[arg(long)]
    schema: PathBuf,
    /// Subcommand scope the parse error occurred in (empty = root).
    #[arg(long, default_value = "")]
    scope: String,
    /// The raw parser error text.
    message: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Flag(args) => run_flag(args),
        Command::Command(args) => run_command(args),
        Command::FromError(args) => run_from_error(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_flag(args: FlagArgs) -> Result<(), String> {
    let root = load_tree(&args.schema)?;
    let scope = resolve_scope(&root, &args.scope)?;
    let exclude_help = args.hide_help || root.hide_help || scope.hide_help;

    match suggest_flag(&scope.flags, &args.input, exclude_help) {
        Some(suggestion) => println!("{suggestion}"),
        None => println!("no suggestion"),
    }
    Ok(())
}

fn run_command(args: CommandArgs) -> Result<(), String> {
    let root = load_tree(&args.schema)?;
    let scope = resolve_scope(&root, &args.scope)?;

    match suggest_command(&scope.subcommands, &args.input) {
        Some(suggestion) => println!("{suggestion}"),
        None => println!("no suggestion"),
    }
    Ok(())
}

fn run_from_error(args: FromErrorArgs) -> Result<(), String> {
    let root = load_tree(&args.schema)?;
    let message = suggest_flag_from_error(&root, &args.message, &args.scope)
        .map_err(|err| err.to_string())?;
    print!("{message}");
    Ok(())
}

fn resolve_scope<'a>(root: &'a CommandDef, scope: &str) -> Result<&'a CommandDef, String> {
    root.resolve_path(scope)
        .ok_or_else(|| format!("unknown command scope '{scope}'"))
}

fn load_tree(path: &PathBuf) -> Result<CommandDef, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("failed to read '{}': {err}", path.display()))?;
    let root: CommandDef = serde_json::from_str(&text)
        .map_err(|err| format!("invalid command tree in '{}': {err}", path.display()))?;

    let errors = validate_command(&root);
    if let Some(first) = errors.first() {
        return Err(format!("invalid command tree in '{}': {first}", path.display()));
    }
    Ok(root)
}
