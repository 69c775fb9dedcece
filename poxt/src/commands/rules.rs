//! Rules command implementation.
//!
//! Prints the scanner's matcher table in priority order.

use std::io::Write;

use poxc_lex::{rules, Pattern};

use crate::error::Result;

fn describe(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Literal(text) => format!("{:?}", text),
        Pattern::StringLiteral => "'\"' ... '\"' or end of input".to_string(),
        Pattern::Number => "digits, optional '.' digits".to_string(),
        Pattern::WhiteSpace => "run of ' '".to_string(),
        Pattern::Identifier => "letter, then letters or digits".to_string(),
    }
}

/// Run the rules command, writing the table to `out`.
pub fn run_rules(out: &mut impl Write) -> Result<()> {
    for (priority, rule) in rules().iter().enumerate() {
        writeln!(
            out,
            "{:>3} {:<12} {}",
            priority,
            rule.kind.name(),
            describe(&rule.pattern)
        )?;
    }
    Ok(())
}
