//! Lexical error type.

use thiserror::Error;

/// Number of characters of preceding source kept in [`LexError::context`].
pub const DEFAULT_CONTEXT_WIDTH: usize = 40;

/// No rule of the matcher table recognizes the text at `offset`.
///
/// Scanning stops at the first such character; no partial token list is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized character {found:?} at offset {offset} (after {context:?})")]
pub struct LexError {
    /// Byte offset of the unrecognized character.
    pub offset: usize,
    /// Up to `context_width` characters immediately before `offset`.
    pub context: String,
    /// The character no rule accepted.
    pub found: char,
}

impl LexError {
    /// Builds the error for the character at `offset` in `source`, keeping
    /// at most `context_width` preceding characters as context.
    ///
    /// An `offset` past the end or inside a multi-byte character is moved
    /// back to the nearest character boundary.
    pub(crate) fn at(source: &str, offset: usize, context_width: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &source[..offset];
        let context_start = if context_width == 0 {
            offset
        } else {
            before
                .char_indices()
                .rev()
                .nth(context_width - 1)
                .map_or(0, |(index, _)| index)
        };

        Self {
            offset,
            context: before[context_start..].to_string(),
            found: source[offset..].chars().next().unwrap_or('\0'),
        }
    }
}
