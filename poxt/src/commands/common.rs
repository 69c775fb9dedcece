//! Common types and utilities for poxt commands.

use std::io::Read;

use clap::ValueEnum;
use poxc_lex::MatchPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{PoxtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token listing formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of tokens
    Json,
}

// ============================================================================
// Argument Parsing
// ============================================================================

/// Parses a `--policy` value.
pub fn parse_policy(value: &str) -> std::result::Result<MatchPolicy, String> {
    MatchPolicy::from_name(value).ok_or_else(|| {
        format!(
            "unknown policy '{}' (expected '{}' or '{}')",
            value,
            MatchPolicy::Longest.name(),
            MatchPolicy::FirstMatch.name()
        )
    })
}

// ============================================================================
// Source Input
// ============================================================================

/// Marker argument meaning "read the source from stdin".
pub const STDIN_MARKER: &str = "-";

/// Resolves the source text to scan.
///
/// An inline `source` is used as given. `None` or `-` reads `input` to the
/// end and drops a single trailing line break, which the scanner does not
/// recognize.
pub fn read_source(source: Option<String>, mut input: impl Read) -> Result<String> {
    match source {
        Some(text) if text != STDIN_MARKER => Ok(text),
        _ => {
            let mut text = String::new();
            input.read_to_string(&mut text).map_err(|e| match e.kind() {
                std::io::ErrorKind::InvalidData => {
                    PoxtError::Validation("source is not valid UTF-8".to_string())
                }
                _ => PoxtError::Io(e),
            })?;
            if text.ends_with('\n') {
                text.pop();
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            Ok(text)
        }
    }
}
