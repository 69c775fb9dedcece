//! Command modules for the poxt CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod rules;
pub mod tokenize;

// Re-export command types and functions
pub use rules::run_rules;
pub use tokenize::{run_tokenize, TokenizeArgs};
