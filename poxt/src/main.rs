//! Poxt CLI - prints the token stream of Pox source text.
//!
//! This is the main entry point for the poxt CLI application.
//! It uses clap for argument parsing and dispatches to the
//! command handlers.

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use poxc_lex::MatchPolicy;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{parse_policy, read_source, OutputFormat};
use commands::{run_rules, run_tokenize, TokenizeArgs};
use config::Config;
use error::{PoxtError, Result};

/// Poxt - print the tokens of Pox source text
#[derive(Parser, Debug)]
#[command(name = "poxt")]
#[command(author = "Pox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the token stream of Pox source text", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "POXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "POXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "POXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the poxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize source text and print the tokens
    ///
    /// The source is given inline, or read from stdin when omitted or `-`.
    Tokenize(TokenizeCommand),

    /// Print the matcher table in priority order
    Rules,
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source text to tokenize (`-` or omitted: read stdin)
    source: Option<String>,

    /// Match policy: longest or first-match (default: from config)
    #[arg(short, long, value_parser = parse_policy)]
    policy: Option<MatchPolicy>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Print whitespace tokens too
    #[arg(short = 'w', long)]
    keep_whitespace: bool,

    /// Append an EOF token
    #[arg(long)]
    eof: bool,

    /// Print per-kind token counts
    #[arg(long)]
    stats: bool,
}

/// Main entry point for the poxt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("poxt: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("poxt: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only the token listing.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PoxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Tokenize(args) => {
            let args = tokenize_args(args, config, std::io::stdin().lock())?;
            run_tokenize(args, &mut out)?;
        }
        Commands::Rules => run_rules(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Merge command-line flags over configuration values.
fn tokenize_args(
    args: TokenizeCommand,
    config: Config,
    stdin: impl std::io::Read,
) -> Result<TokenizeArgs> {
    let mut options = config.scan;
    if let Some(policy) = args.policy {
        options.policy = policy;
    }
    options.emit_eof |= args.eof;

    Ok(TokenizeArgs {
        source: read_source(args.source, stdin)?,
        options,
        format: args.format.unwrap_or(config.output.format),
        keep_whitespace: args.keep_whitespace || config.output.keep_whitespace,
        stats: args.stats,
    })
}
