//! Postfix (RPN) output mode.
//!
//! Identical control flow to the tree-building parser, but reductions
//! append lexemes to a flat output list instead of building nodes. A
//! function reduced at its closing paren gets an `_<arity>` suffix, so the
//! flat sequence stays self-describing without nested structure.

use solvent_lexer::token::{Token, TokenType};

use crate::error::ParseError;
use crate::parser::operator_entry;
use solvent_lexer::ops::Associativity;

/// Render a token sequence as a space-joined postfix string.
///
/// `avg(1+1, median(1,2,3))` renders as `1 1 + 1 2 3 median_3 avg_2`.
pub fn to_postfix(tokens: &[Token]) -> Result<String, ParseError> {
    log::debug!("rendering {} token(s) as postfix", tokens.len());

    let mut output: Vec<String> = Vec::new();
    let mut stack: Vec<&Token> = Vec::new();
    let mut arg_counts: Vec<usize> = Vec::new();

    for token in tokens {
        match token.token_type {
            TokenType::Literal | TokenType::Variable => output.push(token.lexeme.clone()),

            TokenType::Function => stack.push(token),

            TokenType::LeftParen => {
                stack.push(token);
                arg_counts.push(0);
            }

            TokenType::Delimiter => {
                emit_until_left_paren(&mut output, &mut stack)?;
                match arg_counts.last_mut() {
                    Some(count) => *count += 1,
                    None => return Err(ParseError::MismatchedParentheses),
                }
            }

            TokenType::Operator => {
                let current = operator_entry(token)?;
                while let Some(&top) = stack.last() {
                    if top.token_type != TokenType::Operator {
                        break;
                    }
                    let waiting = operator_entry(top)?;
                    let emit_first = match current.associativity {
                        Associativity::Left => current.precedence <= waiting.precedence,
                        Associativity::Right => current.precedence < waiting.precedence,
                    };
                    if !emit_first {
                        break;
                    }
                    stack.pop();
                    output.push(top.lexeme.clone());
                }
                stack.push(token);
            }

            TokenType::RightParen => {
                emit_until_left_paren(&mut output, &mut stack)?;
                stack.pop();
                let arg_count = arg_counts.pop().ok_or(ParseError::MismatchedParentheses)?;
                if stack.last().map_or(false, |top| top.is_function()) {
                    if let Some(function) = stack.pop() {
                        output.push(format!("{}_{}", function.lexeme, arg_count + 1));
                    }
                }
            }
        }
    }

    while let Some(token) = stack.pop() {
        if matches!(
            token.token_type,
            TokenType::LeftParen | TokenType::RightParen
        ) {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(token.lexeme.clone());
    }

    if output.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    Ok(output.join(" "))
}

/// Emit stack items until a `(` is on top (exclusive).
fn emit_until_left_paren(
    output: &mut Vec<String>,
    stack: &mut Vec<&Token>,
) -> Result<(), ParseError> {
    loop {
        match stack.last() {
            Some(top) if top.is_left_paren() => return Ok(()),
            Some(_) => {
                if let Some(token) = stack.pop() {
                    output.push(token.lexeme.clone());
                }
            }
            None => return Err(ParseError::MismatchedParentheses),
        }
    }
}
