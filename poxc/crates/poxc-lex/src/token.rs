//! Token definitions for the Pox language.
//!
//! A [`Token`] is a classified slice of the source text. Its [`TokenKind`]
//! comes from a closed set, so every consumer can match on it exhaustively.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// The closed set of token kinds produced by the scanner.
///
/// The boolean literals are spelled `nope` (false) and `troo` (true).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TokenKind {
    // Structural punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`
    SemiColon,

    // Operators
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals
    /// A double-quoted string, possibly missing its closing quote.
    String,
    /// Digits with an optional fractional part: `7`, `1.23`.
    Number,

    /// ASCII letter followed by ASCII letters and digits.
    Identifier,

    // Reserved words
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `nope`
    Nope,
    /// `troo`
    Troo,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `null`
    Null,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `var`
    Var,
    /// `while`
    While,

    /// A run of space characters.
    WhiteSpace,

    /// End-of-input sentinel with an empty lexeme.
    #[serde(rename = "EOF")]
    Eof,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 40] = [
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::SemiColon,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Slash,
        TokenKind::Star,
        TokenKind::Bang,
        TokenKind::BangEqual,
        TokenKind::Equal,
        TokenKind::EqualEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::And,
        TokenKind::Class,
        TokenKind::Else,
        TokenKind::Nope,
        TokenKind::Troo,
        TokenKind::Fun,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Null,
        TokenKind::Or,
        TokenKind::Print,
        TokenKind::Return,
        TokenKind::Super,
        TokenKind::This,
        TokenKind::Var,
        TokenKind::While,
        TokenKind::WhiteSpace,
        TokenKind::Eof,
    ];

    /// Returns the variant name used in listings, e.g. `"LeftParen"`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::SemiColon => "SemiColon",
            TokenKind::Minus => "Minus",
            TokenKind::Plus => "Plus",
            TokenKind::Slash => "Slash",
            TokenKind::Star => "Star",
            TokenKind::Bang => "Bang",
            TokenKind::BangEqual => "BangEqual",
            TokenKind::Equal => "Equal",
            TokenKind::EqualEqual => "EqualEqual",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterEqual => "GreaterEqual",
            TokenKind::Less => "Less",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::Identifier => "Identifier",
            TokenKind::And => "And",
            TokenKind::Class => "Class",
            TokenKind::Else => "Else",
            TokenKind::Nope => "Nope",
            TokenKind::Troo => "Troo",
            TokenKind::Fun => "Fun",
            TokenKind::For => "For",
            TokenKind::If => "If",
            TokenKind::Null => "Null",
            TokenKind::Or => "Or",
            TokenKind::Print => "Print",
            TokenKind::Return => "Return",
            TokenKind::Super => "Super",
            TokenKind::This => "This",
            TokenKind::Var => "Var",
            TokenKind::While => "While",
            TokenKind::WhiteSpace => "WhiteSpace",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for reserved words, including `nope` and `troo`.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::Nope
                | TokenKind::Troo
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Null
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Returns true for string and number literals.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }

    /// Returns true for tokens that carry no meaning for a parser.
    pub fn is_trivia(self) -> bool {
        self == TokenKind::WhiteSpace
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the reserved word spelled exactly `ident`.
///
/// # Example
///
/// ```
/// use poxc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("troo"), Some(TokenKind::Troo));
/// assert_eq!(keyword_from_ident("true"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "nope" => TokenKind::Nope,
        "troo" => TokenKind::Troo,
        "fun" => TokenKind::Fun,
        "for" => TokenKind::For,
        "if" => TokenKind::If,
        "null" => TokenKind::Null,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// A classified slice of source text.
///
/// Tokens borrow their lexeme from the source, so the source must outlive
/// every token scanned from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'src> {
    /// Byte offset of the first character of the lexeme.
    pub position: usize,
    /// The exact text consumed.
    pub lexeme: &'src str,
    /// Classification of the lexeme.
    pub kind: TokenKind,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, position: usize, lexeme: &'src str) -> Self {
        Self {
            position,
            lexeme,
            kind,
        }
    }

    /// Byte offset one past the end of the lexeme.
    pub fn end(&self) -> usize {
        self.position + self.lexeme.len()
    }

    /// Byte range of the lexeme in the source.
    pub fn span(&self) -> Range<usize> {
        self.position..self.end()
    }

    /// Length of the lexeme in bytes.
    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    /// Returns true only for the `EOF` sentinel.
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.lexeme, self.position)
    }
}
