//! Byte cursor for probing source text.
//!
//! The matcher rules only ever recognize ASCII, so the cursor works on bytes.
//! A rule positions a [`Cursor`] at the offset under test, consumes what it
//! recognizes, and reports how far it got with [`Cursor::consumed`].

/// A forward-only cursor over the bytes of a source string.
///
/// # Example
///
/// ```
/// use poxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::at("x = 42;", 4);
/// cursor.eat_while(|b| b.is_ascii_digit());
/// assert_eq!(cursor.consumed(), 2);
/// assert_eq!(cursor.current_byte(), Some(b';'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being probed.
    source: &'a str,

    /// Offset the cursor started from.
    start: usize,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Creates a cursor at byte `offset` of `source`.
    ///
    /// Offsets past the end are clamped to the end.
    pub fn at(source: &'a str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        Self {
            source,
            start: offset,
            position: offset,
        }
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes consumed since the cursor was created.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.position - self.start
    }

    /// Returns true if no bytes remain.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` bytes ahead of the cursor.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Returns true if the remaining input starts with `text`.
    #[inline]
    pub fn starts_with(&self, text: &str) -> bool {
        self.source.as_bytes()[self.position..].starts_with(text.as_bytes())
    }

    /// Advances past one byte. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    /// Advances by `count` bytes, stopping at end of input.
    pub fn advance_by(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }

    /// Consumes the current byte if it equals `expected`.
    ///
    /// # Returns
    ///
    /// `true` if the byte was consumed.
    #[inline]
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current_byte() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `predicate` holds.
    ///
    /// # Returns
    ///
    /// The number of bytes consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> usize {
        let before = self.position;
        while let Some(b) = self.current_byte() {
            if !predicate(b) {
                break;
            }
            self.position += 1;
        }
        self.position - before
    }

    /// Consumes bytes up to, but not including, the next `needle`.
    ///
    /// Stops at end of input when `needle` does not occur.
    pub fn eat_until(&mut self, needle: u8) -> usize {
        self.eat_while(|b| b != needle)
    }
}
