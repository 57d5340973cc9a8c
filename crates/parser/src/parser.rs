//! The Pratt parser driving the parselet registries.
//!
//! Tokens are pulled lazily from the lexer into a lookahead buffer. The parser
//! itself holds no knowledge of the grammar: every construct is produced by a
//! prefix or infix parselet looked up by token kind.

use super::error::ParseError;
use super::parselets::{self, InfixParselet, InfixRule, PrefixParselet};
use super::precedence::Precedence;
use elpath_ast::Expression;
use elpath_lexer::{LexError, Token, TokenKind, Tokens};
use std::collections::{HashMap, VecDeque};

/// Default bound on expression nesting. Every recursive parse and every infix
/// fold counts one level, so a plain `a/b/c` chain uses two levels per step.
pub const DEFAULT_MAX_DEPTH: usize = 512;

pub struct Parser<'a> {
    tokens: Tokens<'a>,
    prefix: HashMap<TokenKind, PrefixParselet>,
    infix: HashMap<TokenKind, InfixRule>,
    stream: VecDeque<Token>,
    failure: Option<LexError>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens` with the default parselet registries.
    pub fn new(tokens: Tokens<'a>) -> Self {
        Self {
            tokens,
            prefix: parselets::prefix_rules(),
            infix: parselets::infix_rules(),
            stream: VecDeque::new(),
            failure: None,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bounds how deeply expressions may nest before parsing fails with
    /// [`ParseError::TooDeep`].
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Installs or replaces the prefix parselet for `kind`.
    pub fn register_prefix(&mut self, kind: TokenKind, parselet: PrefixParselet) {
        self.prefix.insert(kind, parselet);
    }

    /// Installs or replaces the infix parselet for `kind`.
    pub fn register_infix(
        &mut self,
        kind: TokenKind,
        parselet: InfixParselet,
        precedence: Precedence,
    ) {
        self.infix.insert(kind, InfixRule { parselet, precedence });
    }

    /// Parses one expression at the lowest binding strength.
    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_expression_by(Precedence::Lowest)
    }

    /// Parses one expression, folding infix operators for as long as the next
    /// token binds strictly tighter than `precedence`.
    pub fn parse_expression_by(
        &mut self,
        precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        let entry = self.depth;
        let result = self.parse_nested(precedence);
        self.depth = entry;
        result
    }

    fn parse_nested(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        self.descend()?;
        let token = self.consume()?;
        let prefix = *self
            .prefix
            .get(&token.kind())
            .ok_or_else(|| ParseError::NoPrefixRule(token.clone()))?;
        log::trace!("prefix parselet for {}", token);
        let mut left = prefix(self, token)?;

        loop {
            let next = match self.next_precedence() {
                Ok(next) => next,
                Err(ParseError::BufferOverflow) => break,
                Err(e) => return Err(e),
            };
            if next <= precedence {
                break;
            }

            // Each fold wraps `left` one level deeper.
            self.descend()?;
            let token = self.consume()?;
            let rule = *self
                .infix
                .get(&token.kind())
                .ok_or_else(|| ParseError::NoInfixRule(token.clone()))?;
            log::trace!("infix parselet for {}", token);
            left = (rule.parselet)(self, left, token)?;
        }

        Ok(left)
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    /// Consumes the next token if it has kind `kind`. Never fails: running out
    /// of input or hitting a lex error simply reports `false`.
    pub fn matches(&mut self, kind: TokenKind) -> bool {
        let found = matches!(self.advance(0), Ok(token) if token.kind() == kind);
        if found {
            self.stream.pop_front();
        }
        found
    }

    /// Removes and returns the next token.
    pub fn consume(&mut self) -> Result<Token, ParseError> {
        match self.advance(0) {
            Ok(_) | Err(ParseError::BufferOverflow) => {}
            Err(e) => return Err(e),
        }
        self.stream.pop_front().ok_or(ParseError::BufferUnderflow)
    }

    /// Removes and returns the next token, which must have kind `expected`.
    pub fn consume_token(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let found = self.advance(0)?;
        if found.kind() != expected {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: found.clone(),
            });
        }
        self.consume()
    }

    /// Kind of the next token without consuming it.
    pub fn peek(&mut self) -> Result<TokenKind, ParseError> {
        self.advance(0).map(Token::kind)
    }

    /// Fails with [`ParseError::TrailingInput`] if any token remains.
    pub fn finish(mut self) -> Result<(), ParseError> {
        match self.advance(0) {
            Ok(token) => Err(ParseError::TrailingInput(token.clone())),
            Err(ParseError::BufferOverflow) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Fills the lookahead buffer until it holds `distance + 1` tokens and
    /// returns the token at `distance`.
    fn advance(&mut self, distance: usize) -> Result<&Token, ParseError> {
        while self.stream.len() <= distance {
            if let Some(failure) = &self.failure {
                return Err(ParseError::Lex(failure.clone()));
            }
            match self.tokens.next() {
                Some(Ok(token)) => self.stream.push_back(token),
                Some(Err(e)) => {
                    self.failure = Some(e.clone());
                    return Err(ParseError::Lex(e));
                }
                None => return Err(ParseError::BufferOverflow),
            }
        }
        self.stream.get(distance).ok_or(ParseError::BufferOverflow)
    }

    fn next_precedence(&mut self) -> Result<Precedence, ParseError> {
        let kind = self.peek()?;
        Ok(self
            .infix
            .get(&kind)
            .map_or(Precedence::Lowest, |rule| rule.precedence))
    }
}
