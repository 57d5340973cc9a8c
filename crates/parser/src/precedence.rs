/// Binding strength of infix parselets, weakest first.
///
/// A token without an infix rule reports `Lowest`, which never exceeds the
/// minimum the parse loop starts from, so it ends the current expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    Conditional,
    Sum,
    Product,
    Exponent,
    Prefix,
    Postfix,
    Call,
}
