//! Tokenize command implementation.
//!
//! Scans one source string and prints its tokens, one per line or as JSON.

use std::io::Write;

use indexmap::IndexMap;
use poxc_lex::{ScanOptions, Scanner, Token};
use serde::Serialize;
use tracing::debug;

use super::common::OutputFormat;
use crate::error::Result;

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Source text to scan.
    pub source: String,
    /// Scanner options.
    pub options: ScanOptions,
    /// Listing format.
    pub format: OutputFormat,
    /// Print whitespace tokens too.
    pub keep_whitespace: bool,
    /// Print per-kind counts after the listing.
    pub stats: bool,
}

/// JSON document printed when statistics are requested.
#[derive(Serialize)]
struct Report<'a, 'src> {
    tokens: &'a [&'a Token<'src>],
    stats: &'a IndexMap<&'static str, usize>,
}

/// Run the tokenize command, writing the listing to `out`.
///
/// # Returns
/// * `Result<usize>` - The number of tokens printed
pub fn run_tokenize(args: TokenizeArgs, out: &mut impl Write) -> Result<usize> {
    debug!(
        bytes = args.source.len(),
        policy = args.options.policy.name(),
        "tokenizing source"
    );

    let tokens = Scanner::new(args.options).tokenize(&args.source)?;
    let shown: Vec<&Token<'_>> = tokens
        .iter()
        .filter(|token| args.keep_whitespace || !token.kind.is_trivia())
        .collect();
    let stats = args.stats.then(|| kind_counts(&shown));

    match args.format {
        OutputFormat::Text => write_text(&shown, stats.as_ref(), out)?,
        OutputFormat::Json => write_json(&shown, stats.as_ref(), out)?,
    }

    debug!(
        total = tokens.len(),
        shown = shown.len(),
        "tokenized {} bytes",
        args.source.len()
    );
    Ok(shown.len())
}

/// Counts tokens per kind, in order of first appearance.
pub fn kind_counts(tokens: &[&Token<'_>]) -> IndexMap<&'static str, usize> {
    let mut counts = IndexMap::new();
    for token in tokens {
        *counts.entry(token.kind.name()).or_insert(0) += 1;
    }
    counts
}

fn write_text(
    tokens: &[&Token<'_>],
    stats: Option<&IndexMap<&'static str, usize>>,
    out: &mut impl Write,
) -> Result<()> {
    for (index, token) in tokens.iter().enumerate() {
        writeln!(
            out,
            "{:>4} {:<12} {:?} @{}",
            index,
            token.kind.name(),
            token.lexeme,
            token.position
        )?;
    }

    if let Some(stats) = stats {
        writeln!(out)?;
        for (kind, count) in stats {
            writeln!(out, "{:<12} {}", kind, count)?;
        }
    }
    Ok(())
}

fn write_json(
    tokens: &[&Token<'_>],
    stats: Option<&IndexMap<&'static str, usize>>,
    out: &mut impl Write,
) -> Result<()> {
    match stats {
        Some(stats) => serde_json::to_writer_pretty(&mut *out, &Report { tokens, stats })?,
        None => serde_json::to_writer_pretty(&mut *out, tokens)?,
    }
    writeln!(out)?;
    Ok(())
}
