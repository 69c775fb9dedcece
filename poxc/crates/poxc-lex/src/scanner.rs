//! Scanner driver.
//!
//! The driver walks the source from offset 0, asks the matcher table for the
//! token at the current offset, and advances by the lexeme length until the
//! input is exhausted or no rule matches.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{LexError, DEFAULT_CONTEXT_WIDTH};
use crate::rules::{classify, MatchPolicy};
use crate::token::{Token, TokenKind};

/// Options controlling a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// How the matcher table picks a rule at each offset.
    pub policy: MatchPolicy,

    /// Append an empty `EOF` token at `source.len()` after a successful scan.
    pub emit_eof: bool,

    /// Characters of preceding source kept in a [`LexError`].
    pub context_width: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::default(),
            emit_eof: false,
            context_width: DEFAULT_CONTEXT_WIDTH,
        }
    }
}

impl ScanOptions {
    /// Returns these options with `policy` set.
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns these options with `emit_eof` set.
    pub fn with_eof(mut self, emit_eof: bool) -> Self {
        self.emit_eof = emit_eof;
        self
    }
}

/// Stateless scanner; one instance can serve any number of sources.
///
/// # Example
///
/// ```
/// use poxc_lex::{MatchPolicy, ScanOptions, Scanner, TokenKind};
///
/// let scanner = Scanner::new(ScanOptions::default().with_policy(MatchPolicy::FirstMatch));
/// let kinds: Vec<TokenKind> = scanner
///     .tokenize("a != b")
///     .unwrap()
///     .iter()
///     .map(|t| t.kind)
///     .collect();
///
/// assert_eq!(kinds[2], TokenKind::Bang);
/// assert_eq!(kinds[3], TokenKind::Equal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// Creates a scanner with the given options.
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Returns the options this scanner was created with.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans `source` into its complete token sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for the first offset no rule recognizes. No
    /// tokens are returned in that case.
    pub fn tokenize<'src>(&self, source: &'src str) -> Result<Vec<Token<'src>>, LexError> {
        let tokens = self
            .tokens(source)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                debug!(offset = err.offset, found = ?err.found, "lexing failed");
                err
            })?;

        debug!(
            tokens = tokens.len(),
            bytes = source.len(),
            policy = self.options.policy.name(),
            "lexing finished"
        );
        Ok(tokens)
    }

    /// Returns a lazy iterator over the tokens of `source`.
    ///
    /// The iterator yields at most one error and then stops.
    pub fn tokens<'src>(&self, source: &'src str) -> Tokens<'src> {
        Tokens {
            source,
            position: 0,
            options: self.options,
            done: false,
        }
    }
}

/// Iterator returned by [`Scanner::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'src> {
    source: &'src str,
    position: usize,
    options: ScanOptions,
    done: bool,
}

impl<'src> Tokens<'src> {
    /// Byte offset of the next token to be scanned.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.position >= self.source.len() {
            self.done = true;
            return self
                .options
                .emit_eof
                .then(|| Ok(Token::new(TokenKind::Eof, self.source.len(), "")));
        }

        match classify(self.source, self.position, self.options.policy) {
            Some(token) => {
                trace!(
                    kind = token.kind.name(),
                    position = token.position,
                    len = token.len(),
                    "token"
                );
                self.position = token.end();
                Some(Ok(token))
            }
            None => {
                self.done = true;
                Some(Err(LexError::at(
                    self.source,
                    self.position,
                    self.options.context_width,
                )))
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Scans `source` with the default options.
///
/// # Example
///
/// ```
/// use poxc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("print 42.").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(
///     kinds,
///     [TokenKind::Print, TokenKind::WhiteSpace, TokenKind::Number, TokenKind::Dot]
/// );
/// ```
///
/// # Errors
///
/// Returns a [`LexError`] for the first unrecognized character.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Scanner::default().tokenize(source)
}

/// Drops whitespace tokens, keeping everything a parser cares about.
pub fn significant<'a, 'src: 'a>(
    tokens: impl IntoIterator<Item = &'a Token<'src>>,
) -> impl Iterator<Item = &'a Token<'src>> {
    tokens.into_iter().filter(|token| !token.kind.is_trivia())
}

/// Scans independent sources in parallel.
///
/// Results are in the same order as `sources`.
pub fn tokenize_many<'src, S>(
    sources: &'src [S],
    options: ScanOptions,
) -> Vec<Result<Vec<Token<'src>>, LexError>>
where
    S: AsRef<str> + Sync,
{
    let scanner = Scanner::new(options);
    sources
        .par_iter()
        .map(|source| scanner.tokenize(source.as_ref()))
        .collect()
}
