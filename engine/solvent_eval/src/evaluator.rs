//! Recursive evaluation of an expression tree.

use solvent_ast::ExprNode;

use crate::error::EvalError;
use crate::functions;

/// Compute the numeric value of a tree.
///
/// Post-order: children are evaluated left to right before the parent
/// combines them. The walk borrows the tree immutably, so evaluating the
/// same tree again yields the same result.
pub fn eval(node: &ExprNode) -> Result<f64, EvalError> {
    match node {
        ExprNode::Literal(text) => text.parse::<f64>().map_err(|_| EvalError::NumericFormat {
            lexeme: text.clone(),
        }),

        // No binding environment exists in the core, so a bare variable at
        // evaluation time is always unresolved.
        ExprNode::Variable(name) => Err(EvalError::UnknownSymbol { name: name.clone() }),

        ExprNode::Binary(binary) => {
            let left = eval(&binary.left)?;
            let right = eval(&binary.right)?;
            let op = binary.operator().ok_or_else(|| EvalError::UnknownSymbol {
                name: binary.symbol.to_string(),
            })?;
            Ok(op.apply(left, right))
        }

        ExprNode::Call(call) => {
            let mut args = Vec::with_capacity(call.args.len());
            for arg in &call.args {
                args.push(eval(arg)?);
            }
            functions::dispatch(&call.name, &args)
        }
    }
}
