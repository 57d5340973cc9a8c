//! Token kinds and tokens produced by the lexer.
use std::fmt;

/// The kind of a lexed token.
///
/// `Number`, `String` and `Name` are literal classes. `Null` is the scanning
/// sentinel and never appears on a successfully lexed token. Every other kind
/// is a single punctuation rune that a [`Dialect`](crate::Dialect) may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Null,
    Number,
    String,
    Name,
    LeftParen,
    RightParen,
    Comma,
    Equality,
    Plus,
    Minus,
    Asterisk,
    BackSlash,
    ForwardSlash,
    Caret,
    Tilde,
    Bang,
    QuestionMark,
    Colon,
    LeftSquare,
    RightSquare,
    Attribute,
    Dot,
    Ampersand,
    Pipe,
    ForwardArrow,
    BackArrow,
}

impl TokenKind {
    /// Every punctuation kind, in the order the full dialect lists them.
    pub const PUNCTUATION: [TokenKind; 22] = [
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Comma,
        TokenKind::Equality,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Asterisk,
        TokenKind::BackSlash,
        TokenKind::ForwardSlash,
        TokenKind::Caret,
        TokenKind::Tilde,
        TokenKind::Bang,
        TokenKind::QuestionMark,
        TokenKind::Colon,
        TokenKind::LeftSquare,
        TokenKind::RightSquare,
        TokenKind::Attribute,
        TokenKind::Dot,
        TokenKind::Ampersand,
        TokenKind::Pipe,
        TokenKind::ForwardArrow,
        TokenKind::BackArrow,
    ];

    /// The rune a punctuation kind is lexed from. `None` for literal kinds.
    pub fn rune(self) -> Option<char> {
        let rune = match self {
            TokenKind::Null | TokenKind::Number | TokenKind::String | TokenKind::Name => {
                return None;
            }
            TokenKind::LeftParen => '(',
            TokenKind::RightParen => ')',
            TokenKind::Comma => ',',
            TokenKind::Equality => '=',
            TokenKind::Plus => '+',
            TokenKind::Minus => '-',
            TokenKind::Asterisk => '*',
            TokenKind::BackSlash => '\\',
            TokenKind::ForwardSlash => '/',
            TokenKind::Caret => '^',
            TokenKind::Tilde => '~',
            TokenKind::Bang => '!',
            TokenKind::QuestionMark => '?',
            TokenKind::Colon => ':',
            TokenKind::LeftSquare => '[',
            TokenKind::RightSquare => ']',
            TokenKind::Attribute => '@',
            TokenKind::Dot => '.',
            TokenKind::Ampersand => '&',
            TokenKind::Pipe => '|',
            TokenKind::ForwardArrow => '>',
            TokenKind::BackArrow => '<',
        };
        Some(rune)
    }

    pub fn is_punctuation(self) -> bool {
        self.rune().is_some()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Null => f.write_str("Null"),
            TokenKind::Number => f.write_str("Number"),
            TokenKind::String => f.write_str("String"),
            TokenKind::Name => f.write_str("Name"),
            punctuation => match punctuation.rune() {
                Some(rune) => write!(f, "{}", rune),
                None => Ok(()),
            },
        }
    }
}

/// A lexed token: its kind and the exact source text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn into_literal(self) -> String {
        self.literal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(TokenType:{}, Value:{:?})", self.kind, self.literal)
    }
}
