//! Borrowed views over literal expression nodes.
use std::borrow::Cow;
use std::fmt;

/// The value side of a comparison, as handed to host predicate hooks.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal<'a> {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Name(&'a str),
    /// String content with its delimiters removed and escapes resolved.
    String(Cow<'a, str>),
}

impl Literal<'_> {
    /// Returns the text of a name or string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Name(s) => Some(s),
            Literal::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::Name(s) => write!(f, "{}", s),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// Strips the surrounding double quotes of a raw string literal and resolves
/// `\"` and `\\`. Other escape pairs are kept verbatim.
///
/// A literal cut short by the end of input has no closing quote; only the
/// delimiters actually present are removed.
pub fn unquote(raw: &str) -> Cow<'_, str> {
    let inner = raw.strip_prefix('"').unwrap_or(raw);
    let inner = match inner.strip_suffix('"') {
        Some(stripped) if !stripped.ends_with('\\') || stripped.ends_with("\\\\") => stripped,
        _ => inner,
    };

    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('"' | '\\')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote_plain() {
        assert_eq!(unquote("\"subnode\""), "subnode");
        assert!(matches!(unquote("\"plain\""), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unquote_escapes() {
        assert_eq!(unquote(r#""say \"hi\"""#), r#"say "hi""#);
        assert_eq!(unquote(r#""a\\b""#), r"a\b");
        assert_eq!(unquote(r#""tab\t""#), r"tab\t");
    }

    #[test]
    fn test_unquote_unterminated() {
        assert_eq!(unquote("\"open"), "open");
        assert_eq!(unquote(r#""ends\""#), r#"ends""#);
    }

    #[test]
    fn test_literal_as_str() {
        assert_eq!(Literal::Name("n").as_str(), Some("n"));
        assert_eq!(Literal::Integer(1).as_str(), None);
    }
}
