use thiserror::Error;

/// Errors surfaced while turning a token stream into a tree or a postfix
/// rendering. Parsing is all-or-nothing; no partial output accompanies an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An unmatched `(` or `)` was detected, either while seeking a
    /// matching opener or because one survived to the end of input.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// The token stream produced no output at all (empty or
    /// whitespace-only input).
    #[error("empty expression")]
    EmptyExpression,

    /// The expression reduced to something other than a single tree, for
    /// example a missing operator between two operands or an operator
    /// short of operands.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
}
