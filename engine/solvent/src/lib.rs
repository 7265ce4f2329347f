//! Solvent: an embeddable arithmetic expression engine.
//!
//! Text goes in, one number comes out: `text → tokens → tree → value`.
//! Expressions may use numeric literals, the binary operators `+ - * / ^`
//! with the usual precedence and associativity, parenthesized grouping,
//! and multi-argument function calls — statistical reducers (`avg`,
//! `mean`, `median`, `mode`, `countArgs`) plus a namespace of standard
//! math functions (`sin`, `sqrt`, `pow`, ...).
//!
//! Each call is a pure, self-contained computation. The only process-wide
//! state is the read-only operator table and function registry, so
//! concurrent evaluations need no synchronization.
//!
//! ```
//! assert_eq!(solvent::evaluate("3 + 4 * 2").unwrap(), 11.0);
//! assert_eq!(solvent::evaluate("3 + 4 * 2 / (1 - 5)^2").unwrap(), 3.5);
//! assert_eq!(solvent::evaluate("median(1,2,3,4)").unwrap(), 2.5);
//! ```

use thiserror::Error;

pub use solvent_ast::{BinaryExprNode, CallExprNode, ExprNode};
pub use solvent_eval::{dispatch, eval, EvalError};
pub use solvent_lexer::{tokenize, Token, TokenType};
pub use solvent_parser::{parse, parse_tokens, ParseError};

/// Any failure from the full evaluate pipeline. Errors surface immediately
/// with no partial result; the engine never guesses at a repair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The expression did not parse
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but did not evaluate
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Evaluate expression text to a single number.
///
/// Composed as tokenize → parse → eval.
///
/// ```
/// assert_eq!(solvent::evaluate("2^3^2").unwrap(), 512.0);
/// assert!(solvent::evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let tokens = tokenize(source);
    let tree = parse_tokens(&tokens)?;
    Ok(eval(&tree)?)
}

/// Render expression text as a space-joined postfix (RPN) string, with
/// function names suffixed by their arity.
///
/// ```
/// assert_eq!(solvent::to_postfix("3 + 4 * 2").unwrap(), "3 4 2 * +");
/// assert_eq!(solvent::to_postfix("avg(1,2,3)").unwrap(), "1 2 3 avg_3");
/// ```
pub fn to_postfix(source: &str) -> Result<String, Error> {
    Ok(solvent_parser::to_postfix(&tokenize(source))?)
}
