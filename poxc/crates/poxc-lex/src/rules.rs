//! The matcher table.
//!
//! Classification is driven by [`RULES`], an ordered list of `(kind, pattern)`
//! pairs. At each offset the rules are probed and one winner is picked
//! according to a [`MatchPolicy`]:
//!
//! - [`MatchPolicy::Longest`] takes the longest match, ties going to the
//!   earlier rule. `!=` is one `BangEqual` token and `fortune` is one
//!   `Identifier`.
//! - [`MatchPolicy::FirstMatch`] takes the first rule that matches at all.
//!   Single-character operators shadow their two-character forms and
//!   keywords shadow identifier prefixes, so `!=` is `Bang` `Equal` and
//!   `fortune` is `For` `Identifier("tune")`.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// How the matcher table is traversed at each offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Maximal munch over the whole table; table order breaks ties.
    #[default]
    Longest,
    /// First rule in table order wins regardless of length.
    FirstMatch,
}

impl MatchPolicy {
    /// Parses a policy name as written in config files and on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "longest" => Some(Self::Longest),
            "first-match" => Some(Self::FirstMatch),
            _ => None,
        }
    }

    /// Returns the name accepted by [`MatchPolicy::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Longest => "longest",
            Self::FirstMatch => "first-match",
        }
    }
}

/// What a rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Exactly this text. Keywords use this too, with no boundary check.
    Literal(&'static str),
    /// `"` through the next `"` inclusive, or through end of input.
    StringLiteral,
    /// `digit+`, then `.` `digit+` if a digit follows the dot.
    Number,
    /// A maximal run of `' '`.
    WhiteSpace,
    /// An ASCII letter, then a maximal run of ASCII letters and digits.
    Identifier,
}

impl Pattern {
    /// Returns the length of the match at `offset`, or `None` if the
    /// pattern does not match there.
    ///
    /// A match is never empty.
    pub fn match_len(&self, source: &str, offset: usize) -> Option<NonZeroUsize> {
        let mut cursor = Cursor::at(source, offset);
        match *self {
            Pattern::Literal(text) => {
                if !cursor.starts_with(text) {
                    return None;
                }
                cursor.advance_by(text.len());
            }
            Pattern::StringLiteral => {
                if !cursor.match_byte(b'"') {
                    return None;
                }
                cursor.eat_until(b'"');
                cursor.match_byte(b'"');
            }
            Pattern::Number => {
                if cursor.eat_while(|b| b.is_ascii_digit()) == 0 {
                    return None;
                }
                let fraction_follows = cursor.current_byte() == Some(b'.')
                    && cursor.peek_byte(1).is_some_and(|b| b.is_ascii_digit());
                if fraction_follows {
                    cursor.advance();
                    cursor.eat_while(|b| b.is_ascii_digit());
                }
            }
            Pattern::WhiteSpace => {
                cursor.eat_while(|b| b == b' ');
            }
            Pattern::Identifier => {
                if !cursor.current_byte().is_some_and(|b| b.is_ascii_alphabetic()) {
                    return None;
                }
                cursor.eat_while(|b| b.is_ascii_alphanumeric());
            }
        }
        NonZeroUsize::new(cursor.consumed())
    }
}

/// One entry of the matcher table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Kind of the token this rule produces.
    pub kind: TokenKind,
    /// What the rule recognizes.
    pub pattern: Pattern,
}

impl Rule {
    const fn new(kind: TokenKind, pattern: Pattern) -> Self {
        Self { kind, pattern }
    }

    /// Probes this rule alone at `offset`, returning the match length.
    pub fn probe(&self, source: &str, offset: usize) -> Option<usize> {
        self.pattern.match_len(source, offset).map(NonZeroUsize::get)
    }

    /// Builds the token this rule recognizes at `offset`, if any.
    pub fn token<'src>(&self, source: &'src str, offset: usize) -> Option<Token<'src>> {
        let len = self.probe(source, offset)?;
        Some(Token::new(self.kind, offset, &source[offset..offset + len]))
    }
}

const fn lit(kind: TokenKind, text: &'static str) -> Rule {
    Rule::new(kind, Pattern::Literal(text))
}

/// The matcher table in priority order.
pub static RULES: [Rule; 39] = [
    // Single-character punctuation
    lit(TokenKind::LeftParen, "("),
    lit(TokenKind::RightParen, ")"),
    lit(TokenKind::LeftBrace, "{"),
    lit(TokenKind::RightBrace, "}"),
    lit(TokenKind::Comma, ","),
    lit(TokenKind::Dot, "."),
    lit(TokenKind::Minus, "-"),
    lit(TokenKind::Plus, "+"),
    lit(TokenKind::SemiColon, ";"),
    lit(TokenKind::Slash, "/"),
    lit(TokenKind::Star, "*"),
    // One- and two-character operators, short form first
    lit(TokenKind::Bang, "!"),
    lit(TokenKind::BangEqual, "!="),
    lit(TokenKind::Equal, "="),
    lit(TokenKind::EqualEqual, "=="),
    lit(TokenKind::Greater, ">"),
    lit(TokenKind::GreaterEqual, ">="),
    lit(TokenKind::Less, "<"),
    lit(TokenKind::LessEqual, "<="),
    // Literals and whitespace
    Rule::new(TokenKind::String, Pattern::StringLiteral),
    Rule::new(TokenKind::Number, Pattern::Number),
    Rule::new(TokenKind::WhiteSpace, Pattern::WhiteSpace),
    // Reserved words
    lit(TokenKind::And, "and"),
    lit(TokenKind::Class, "class"),
    lit(TokenKind::Else, "else"),
    lit(TokenKind::Nope, "nope"),
    lit(TokenKind::Fun, "fun"),
    lit(TokenKind::For, "for"),
    lit(TokenKind::If, "if"),
    lit(TokenKind::Null, "null"),
    lit(TokenKind::Or, "or"),
    lit(TokenKind::Print, "print"),
    lit(TokenKind::Return, "return"),
    lit(TokenKind::Super, "super"),
    lit(TokenKind::This, "this"),
    lit(TokenKind::Troo, "troo"),
    lit(TokenKind::Var, "var"),
    lit(TokenKind::While, "while"),
    // Identifier last so every keyword outranks it on a tie.
    Rule::new(TokenKind::Identifier, Pattern::Identifier),
];

/// Returns the matcher table in priority order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Classifies the token starting at `offset`.
///
/// Returns `None` when no rule matches, including at end of input.
///
/// # Example
///
/// ```
/// use poxc_lex::{classify, MatchPolicy, TokenKind};
///
/// let longest = classify("!= x", 0, MatchPolicy::Longest).unwrap();
/// assert_eq!((longest.kind, longest.lexeme), (TokenKind::BangEqual, "!="));
///
/// let first = classify("!= x", 0, MatchPolicy::FirstMatch).unwrap();
/// assert_eq!((first.kind, first.lexeme), (TokenKind::Bang, "!"));
/// ```
pub fn classify(source: &str, offset: usize, policy: MatchPolicy) -> Option<Token<'_>> {
    if offset >= source.len() {
        return None;
    }

    let (rule, len) = match policy {
        MatchPolicy::FirstMatch => RULES
            .iter()
            .find_map(|rule| rule.probe(source, offset).map(|len| (rule, len)))?,
        MatchPolicy::Longest => {
            let mut best: Option<(&Rule, usize)> = None;
            for rule in RULES.iter() {
                if let Some(len) = rule.probe(source, offset) {
                    // Strictly longer only: earlier rules win ties.
                    if best.map_or(true, |(_, best_len)| len > best_len) {
                        best = Some((rule, len));
                    }
                }
            }
            best?
        }
    };

    Some(Token::new(rule.kind, offset, &source[offset..offset + len]))
}
