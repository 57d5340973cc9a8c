//! Punctuation dialects selecting which single-rune tokens a lexer recognises.
use super::token::TokenKind;
use std::collections::HashMap;

/// A rune → token kind map for punctuation.
///
/// Literal classes (numbers, strings, names) are always recognised; the
/// dialect only decides which punctuation runes become tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dialect {
    punctuation: HashMap<char, TokenKind>,
}

impl Dialect {
    /// Literals only, no punctuation.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Every punctuation kind: `( ) , = + - * \ / ^ ~ ! ? : [ ] @ . & | > <`.
    pub fn full() -> Self {
        Self::from_kinds(TokenKind::PUNCTUATION)
    }

    /// Builds a dialect from a set of kinds. Literal kinds are ignored.
    pub fn from_kinds(kinds: impl IntoIterator<Item = TokenKind>) -> Self {
        let punctuation = kinds
            .into_iter()
            .filter_map(|kind| kind.rune().map(|rune| (rune, kind)))
            .collect();
        Self { punctuation }
    }

    pub fn lookup(&self, rune: char) -> Option<TokenKind> {
        self.punctuation.get(&rune).copied()
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        kind.rune().is_some_and(|rune| self.lookup(rune) == Some(kind))
    }

    pub fn is_empty(&self) -> bool {
        self.punctuation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_has_no_punctuation() {
        let dialect = Dialect::minimal();
        assert!(dialect.is_empty());
        assert_eq!(dialect.lookup('/'), None);
    }

    #[test]
    fn test_full_maps_every_rune() {
        let dialect = Dialect::full();
        assert_eq!(dialect.lookup('/'), Some(TokenKind::ForwardSlash));
        assert_eq!(dialect.lookup('@'), Some(TokenKind::Attribute));
        assert_eq!(dialect.lookup('<'), Some(TokenKind::BackArrow));
        assert_eq!(dialect.lookup('#'), None);
    }

    #[test]
    fn test_from_kinds_skips_literals() {
        let dialect = Dialect::from_kinds([TokenKind::Name, TokenKind::Dot]);
        assert!(dialect.contains(TokenKind::Dot));
        assert!(!dialect.contains(TokenKind::Name));
        assert!(!dialect.contains(TokenKind::ForwardSlash));
    }
}
