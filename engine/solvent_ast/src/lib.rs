//! Abstract Syntax Tree (AST) for the Solvent expression engine.
//!
//! This crate defines the expression tree built by the parser and consumed
//! by the evaluator, along with optional JSON serialization for hosts that
//! want to persist or inspect parse trees.

pub mod ast;

// Re-export commonly used types
pub use ast::{BinaryExprNode, CallExprNode, ExprNode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::error::Error;

/// A result type for AST operations.
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use solvent_ast::ast::ExprNode;
/// use solvent_ast::to_json;
///
/// let expr = ExprNode::binary(
///     ExprNode::Literal("1".into()),
///     '+',
///     ExprNode::Literal("2".into()),
/// );
/// let json = to_json(&expr).unwrap();
///
/// assert!(json.contains("Binary"), "JSON should contain the node kind");
/// assert!(json.contains(r#""symbol": "+""#), "JSON should contain the symbol");
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
///
/// # Example
///
/// ```
/// use solvent_ast::ast::ExprNode;
/// use solvent_ast::from_json;
///
/// let expr: ExprNode = from_json(r#"{"Literal":"42"}"#).unwrap();
/// assert_eq!(expr, ExprNode::Literal("42".into()));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
