//! Shunting-yard parsing of a token stream into an expression tree.
//!
//! Three pieces of working state drive the algorithm: an output stack of
//! finished nodes (built bottom-up), an operator stack holding operator,
//! function, and `(` tokens, and an argument-count stack with one counter
//! per open parenthesis. The counter is bumped on every delimiter at that
//! depth, so a function learns its arity the moment its `)` arrives.

use solvent_ast::ExprNode;
use solvent_lexer::lexer::tokenize;
use solvent_lexer::ops::{Associativity, Operator};
use solvent_lexer::token::{Token, TokenType};

use crate::error::ParseError;

/// Parse expression text. Convenience wrapper that tokenizes internally.
pub fn parse(source: &str) -> Result<ExprNode, ParseError> {
    parse_tokens(&tokenize(source))
}

/// Parse a token sequence into a tree with exactly one root.
pub fn parse_tokens(tokens: &[Token]) -> Result<ExprNode, ParseError> {
    log::debug!("parsing {} token(s)", tokens.len());

    let mut output: Vec<ExprNode> = Vec::new();
    let mut operators: Vec<&Token> = Vec::new();
    let mut arg_counts: Vec<usize> = Vec::new();

    for token in tokens {
        match token.token_type {
            TokenType::Literal => output.push(ExprNode::Literal(token.lexeme.clone())),
            TokenType::Variable => output.push(ExprNode::Variable(token.lexeme.clone())),

            // Arguments are collected once the matching paren closes.
            TokenType::Function => operators.push(token),

            TokenType::LeftParen => {
                operators.push(token);
                arg_counts.push(0);
            }

            TokenType::Delimiter => {
                reduce_until_left_paren(&mut output, &mut operators)?;
                match arg_counts.last_mut() {
                    Some(count) => *count += 1,
                    None => return Err(ParseError::MismatchedParentheses),
                }
            }

            TokenType::Operator => {
                let current = operator_entry(token)?;
                while let Some(&top) = operators.last() {
                    if top.token_type != TokenType::Operator {
                        break;
                    }
                    let waiting = operator_entry(top)?;
                    let reduce_first = match current.associativity {
                        Associativity::Left => current.precedence <= waiting.precedence,
                        Associativity::Right => current.precedence < waiting.precedence,
                    };
                    if !reduce_first {
                        break;
                    }
                    operators.pop();
                    reduce_operator(&mut output, top)?;
                }
                operators.push(token);
            }

            TokenType::RightParen => {
                reduce_until_left_paren(&mut output, &mut operators)?;
                operators.pop();
                let arg_count = arg_counts.pop().ok_or(ParseError::MismatchedParentheses)?;
                if operators.last().map_or(false, |top| top.is_function()) {
                    if let Some(function) = operators.pop() {
                        reduce_function(&mut output, function, arg_count + 1)?;
                    }
                }
            }
        }
    }

    // Whatever is left on the operator stack reduces in pop order; a
    // surviving parenthesis means the input never balanced.
    while let Some(token) = operators.pop() {
        if matches!(
            token.token_type,
            TokenType::LeftParen | TokenType::RightParen
        ) {
            return Err(ParseError::MismatchedParentheses);
        }
        reduce_stack_token(&mut output, token)?;
    }

    match output.len() {
        0 => Err(ParseError::EmptyExpression),
        1 => output.pop().ok_or(ParseError::EmptyExpression),
        extra => Err(ParseError::MalformedExpression(format!(
            "{extra} root nodes remain"
        ))),
    }
}

/// The operator table entry for a token, or the malformed-expression error
/// naming the offending lexeme (a coalesced run like `++` has no entry).
pub(crate) fn operator_entry(token: &Token) -> Result<&'static Operator, ParseError> {
    token.operator().ok_or_else(|| {
        ParseError::MalformedExpression(format!("unknown operator '{}'", token.lexeme))
    })
}

/// Pop and reduce until a `(` is on top of the operator stack (exclusive).
fn reduce_until_left_paren(
    output: &mut Vec<ExprNode>,
    operators: &mut Vec<&Token>,
) -> Result<(), ParseError> {
    loop {
        match operators.last() {
            Some(top) if top.is_left_paren() => return Ok(()),
            Some(_) => {
                if let Some(token) = operators.pop() {
                    reduce_stack_token(output, token)?;
                }
            }
            None => return Err(ParseError::MismatchedParentheses),
        }
    }
}

/// Reduce an item popped off the operator stack: operators take two
/// operands; a function reduced here has no recorded argument count and
/// defaults to two.
fn reduce_stack_token(output: &mut Vec<ExprNode>, token: &Token) -> Result<(), ParseError> {
    match token.token_type {
        TokenType::Operator => reduce_operator(output, token),
        TokenType::Function => reduce_function(output, token, 2),
        _ => Err(ParseError::MalformedExpression(format!(
            "unexpected '{}'",
            token.lexeme
        ))),
    }
}

/// Build a binary node from the top two output entries, preserving their
/// original left-to-right order.
fn reduce_operator(output: &mut Vec<ExprNode>, token: &Token) -> Result<(), ParseError> {
    let symbol = match token.symbol() {
        Some(symbol) => symbol,
        None => {
            return Err(ParseError::MalformedExpression(format!(
                "unknown operator '{}'",
                token.lexeme
            )))
        }
    };
    let right = output.pop();
    let left = output.pop();
    match (left, right) {
        (Some(left), Some(right)) => {
            log::trace!("reduce '{symbol}'");
            output.push(ExprNode::binary(left, symbol, right));
            Ok(())
        }
        _ => Err(ParseError::MalformedExpression(format!(
            "operator '{}' is missing an operand",
            token.lexeme
        ))),
    }
}

/// Build a call node from the top `arity` output entries, in source order.
fn reduce_function(
    output: &mut Vec<ExprNode>,
    token: &Token,
    arity: usize,
) -> Result<(), ParseError> {
    if output.len() < arity {
        return Err(ParseError::MalformedExpression(format!(
            "function '{}' expected {} argument(s), found {}",
            token.lexeme,
            arity,
            output.len()
        )));
    }
    log::trace!("reduce call '{}' with {arity} argument(s)", token.lexeme);
    let args = output.split_off(output.len() - arity);
    output.push(ExprNode::call(token.lexeme.clone(), args));
    Ok(())
}
