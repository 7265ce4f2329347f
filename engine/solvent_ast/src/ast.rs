// Abstract Syntax Tree definitions for Solvent expressions.
// One node kind per lexical shape; the set is closed so evaluation can
// match exhaustively.

use std::fmt;

use solvent_lexer::ops::{self, Operator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression tree node. Each node exclusively owns its children; the
/// parser constructs a node once and nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExprNode {
    /// A numeric literal, stored as its source text. The text is parsed to
    /// a number at evaluation time, which is where `1.2.3` finally fails.
    Literal(String),
    /// A bare name. The core engine binds no variables, so reaching one of
    /// these during evaluation is an unknown-symbol error.
    Variable(String),
    /// A binary operator application
    Binary(Box<BinaryExprNode>),
    /// A function call with an ordered argument list
    Call(Box<CallExprNode>),
}

/// A binary operator application: `left symbol right`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExprNode {
    pub left: ExprNode,
    pub symbol: char,
    pub right: ExprNode,
}

impl BinaryExprNode {
    /// The operator table entry for this node's symbol, if one is
    /// registered. The parser only builds binary nodes from registered
    /// operators, so a miss here means the tree was assembled by hand.
    pub fn operator(&self) -> Option<&'static Operator> {
        ops::lookup(self.symbol)
    }
}

/// A function call: `name(args...)` with arguments in source order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallExprNode {
    pub name: String,
    pub args: Vec<ExprNode>,
}

impl ExprNode {
    /// Build a binary node from its operands in source order.
    pub fn binary(left: ExprNode, symbol: char, right: ExprNode) -> Self {
        ExprNode::Binary(Box::new(BinaryExprNode {
            left,
            symbol,
            right,
        }))
    }

    /// Build a call node from a name and its arguments in source order.
    pub fn call(name: impl Into<String>, args: Vec<ExprNode>) -> Self {
        ExprNode::Call(Box::new(CallExprNode {
            name: name.into(),
            args,
        }))
    }
}

/// Renders fully parenthesized infix text. The output tokenizes and parses
/// back to an equal tree, which makes the rendering handy in diagnostics
/// and tests.
impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprNode::Literal(text) => write!(f, "{text}"),
            ExprNode::Variable(name) => write!(f, "{name}"),
            ExprNode::Binary(binary) => {
                write!(f, "({} {} {})", binary.left, binary.symbol, binary.right)
            }
            ExprNode::Call(call) => {
                write!(f, "{}(", call.name)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}
