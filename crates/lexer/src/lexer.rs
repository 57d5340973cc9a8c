//! A single-pass, rune-at-a-time tokenizer over a rewindable cursor.
//!
//! Scanning rules, in priority order:
//! 1. Numbers: ASCII digits, or a leading `-` / `.`. Once a token is known to be
//!    a number, `e` and `+` are accepted as well so exponents lex as one token.
//! 2. Strings: start at `"` and run to the next `"` whose preceding input rune
//!    is not `\`. Delimiters stay in the literal.
//! 3. Punctuation from the active [`Dialect`].
//! 4. Names: runs of ASCII alphanumerics and `_`.
//!
//! Whitespace (code points up to 32) between tokens is skipped.

use super::dialect::Dialect;
use super::error::LexError;
use super::token::{Token, TokenKind};

/// Holds the source text and the punctuation dialect to lex it with.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    dialect: Dialect,
}

impl Lexer {
    /// Creates a lexer using the minimal (literal-only) dialect.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dialect: Dialect::minimal(),
        }
    }

    /// Returns a new lexer over the same source using `dialect`.
    pub fn with(&self, dialect: Dialect) -> Self {
        Self {
            source: self.source.clone(),
            dialect,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Starts a fresh, single-use pass over the source.
    pub fn iter(&self) -> Tokens<'_> {
        Tokens {
            cursor: Cursor::new(&self.source),
            dialect: &self.dialect,
        }
    }
}

/// Byte-offset cursor with explicit save/restore.
#[derive(Debug)]
struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    fn position(&self) -> usize {
        self.offset
    }

    fn restore(&mut self, position: usize) {
        self.offset = position;
    }

    fn read(&mut self) -> Option<char> {
        let ch = self.source[self.offset..].chars().next()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    fn is_exhausted(&self) -> bool {
        self.offset >= self.source.len()
    }

    fn exhaust(&mut self) {
        self.offset = self.source.len();
    }
}

/// The token stream of one lexing pass.
///
/// Yields `Err` at most once: a failed scan exhausts the stream.
#[derive(Debug)]
pub struct Tokens<'a> {
    cursor: Cursor<'a>,
    dialect: &'a Dialect,
}

impl Tokens<'_> {
    /// True while unread input remains.
    ///
    /// Trailing whitespace counts as input, so `next()` may still return
    /// `None` after this reports `true`.
    pub fn has_next(&self) -> bool {
        !self.cursor.is_exhausted()
    }

    fn scan(&mut self) -> Result<Option<Token>, LexError> {
        let mut kind = TokenKind::Null;
        let mut buffer = String::new();
        let mut previous: Option<char> = None;

        loop {
            let mark = self.cursor.position();
            let Some(ch) = self.cursor.read() else {
                return Ok(match kind {
                    TokenKind::Null => None,
                    _ => Some(Token::new(kind, buffer)),
                });
            };

            if matches!(kind, TokenKind::Null | TokenKind::Number) {
                if is_numeric(ch, kind) {
                    kind = TokenKind::Number;
                    buffer.push(ch);
                    continue;
                }

                if kind == TokenKind::Number {
                    let mut chars = buffer.chars();
                    if let (Some(start), None) = (chars.next(), chars.next()) {
                        if !start.is_ascii_digit() {
                            self.cursor.restore(mark);
                            if let Some(punctuation) = self.dialect.lookup(start) {
                                return Ok(Some(Token::new(punctuation, start.to_string())));
                            }
                            // Not a number after all, and not punctuation either.
                            kind = TokenKind::Null;
                            buffer.clear();
                            continue;
                        }
                    }
                    self.cursor.restore(mark);
                    return Ok(Some(Token::new(kind, buffer)));
                }
            }

            if (kind == TokenKind::Null && ch == '"') || kind == TokenKind::String {
                buffer.push(ch);
                if kind == TokenKind::String && ch == '"' && previous != Some('\\') {
                    return Ok(Some(Token::new(kind, buffer)));
                }
                previous = Some(ch);
                kind = TokenKind::String;
                continue;
            }

            if kind == TokenKind::Null {
                if let Some(punctuation) = self.dialect.lookup(ch) {
                    return Ok(Some(Token::new(punctuation, ch.to_string())));
                }
            }

            if matches!(kind, TokenKind::Null | TokenKind::Name) {
                if ch.is_ascii_alphanumeric() || ch == '_' {
                    kind = TokenKind::Name;
                    buffer.push(ch);
                    continue;
                }
                if kind == TokenKind::Name {
                    self.cursor.restore(mark);
                    return Ok(Some(Token::new(kind, buffer)));
                }
            }

            if (ch as u32) <= 32 {
                continue;
            }

            return Err(LexError::NoTokenRecognized {
                position: mark,
                found: ch,
            });
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.scan() {
            Ok(Some(token)) => {
                log::trace!("lexed {}", token);
                Some(Ok(token))
            }
            Ok(None) => None,
            Err(e) => {
                self.cursor.exhaust();
                Some(Err(e))
            }
        }
    }
}

fn is_numeric(ch: char, kind: TokenKind) -> bool {
    ch.is_ascii_digit()
        || ch == '-'
        || ch == '.'
        || (kind == TokenKind::Number && (ch == 'e' || ch == '+'))
}
