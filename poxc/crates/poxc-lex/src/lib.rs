//! poxc-lex - Lexical Scanner for the Pox Scripting Language
//!
//! This crate turns Pox source text into an ordered sequence of classified
//! tokens. The scan is lossless: whitespace is a real token kind, and the
//! lexemes of the returned tokens concatenate back to the source exactly.
//!
//! # Example Usage
//!
//! ```
//! use poxc_lex::{significant, tokenize, TokenKind};
//!
//! let tokens = tokenize("if (troo) { return 7 }").unwrap();
//! let kinds: Vec<TokenKind> = significant(&tokens).map(|t| t.kind).collect();
//!
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::If,
//!         TokenKind::LeftParen,
//!         TokenKind::Troo,
//!         TokenKind::RightParen,
//!         TokenKind::LeftBrace,
//!         TokenKind::Return,
//!         TokenKind::Number,
//!         TokenKind::RightBrace,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`rules`] - The ordered matcher table and match policies
//! - [`scanner`] - The driver loop
//! - [`cursor`] - Byte cursor used by the matcher rules
//! - [`error`] - The lexical error type
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `nope`, `troo`, `fun`, `for`, `if`, `null`, `or`,
//! `print`, `return`, `super`, `this`, `var`, `while`
//!
//! `nope` and `troo` are the boolean literals false and true.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z][a-zA-Z0-9]*`. There is no underscore.
//!
//! ## Literals
//!
//! - **Number**: `7`, `1.23`. A dot not followed by a digit is a separate `Dot`.
//! - **String**: `"lol"`. No escapes. A string missing its closing quote runs
//!   to end of input and is not an error.
//!
//! ## Operators and Punctuation
//!
//! `( ) { } , . - + ; / * ! != = == > >= < <=`
//!
//! ## Special
//!
//! - **WhiteSpace**: a run of spaces. Tabs and newlines are not recognized.
//! - **EOF**: optional empty sentinel, see [`ScanOptions::emit_eof`].
//!
//! # Match Policy
//!
//! At each offset the matcher table is probed under a [`MatchPolicy`]. The
//! default, [`MatchPolicy::Longest`], is maximal munch: `>=` is one token and
//! `fortune` is an identifier. [`MatchPolicy::FirstMatch`] accepts the first
//! rule in table order, so `>=` scans as `Greater` `Equal` and `fortune` as
//! `For` followed by `Identifier("tune")`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod rules;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use error::{LexError, DEFAULT_CONTEXT_WIDTH};
pub use rules::{classify, rules, MatchPolicy, Pattern, Rule, RULES};
pub use scanner::{significant, tokenize, tokenize_many, ScanOptions, Scanner, Tokens};
pub use token::{keyword_from_ident, Token, TokenKind};
