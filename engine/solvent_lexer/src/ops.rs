//! The operator table: symbol, precedence, associativity, and the binary
//! evaluation rule for each supported operator.
//!
//! The table is built once, never mutated, and shared by reference across
//! all parses: the classifier consults it for symbol membership, the parser
//! for ordering decisions, and the evaluator for the arithmetic itself.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// For equal-precedence operators, whether repeated application groups
/// leftmost-first or rightmost-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`
    Right,
}

/// Descriptor for a single binary operator.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    /// The character that spells this operator in source text
    pub symbol: char,
    /// Binding priority; higher binds tighter
    pub precedence: u8,
    /// Grouping direction among equal-precedence neighbors
    pub associativity: Associativity,
    eval: fn(f64, f64) -> f64,
}

impl Operator {
    const fn new(
        symbol: char,
        precedence: u8,
        associativity: Associativity,
        eval: fn(f64, f64) -> f64,
    ) -> Self {
        Self {
            symbol,
            precedence,
            associativity,
            eval,
        }
    }

    /// Apply the operator's arithmetic rule to two evaluated operands.
    ///
    /// Division by zero follows IEEE-754 semantics and yields an infinity
    /// or NaN rather than an error.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        (self.eval)(lhs, rhs)
    }
}

lazy_static! {
    /// Every operator the engine understands, keyed by its symbol.
    pub static ref OPERATORS: HashMap<char, Operator> = {
        let table = [
            Operator::new('+', 1, Associativity::Left, |a, b| a + b),
            Operator::new('-', 1, Associativity::Left, |a, b| a - b),
            Operator::new('*', 2, Associativity::Left, |a, b| a * b),
            Operator::new('/', 2, Associativity::Left, |a, b| a / b),
            Operator::new('^', 3, Associativity::Right, f64::powf),
        ];
        table.into_iter().map(|op| (op.symbol, op)).collect()
    };
}

/// Look up the descriptor for an operator symbol.
pub fn lookup(symbol: char) -> Option<&'static Operator> {
    OPERATORS.get(&symbol)
}

/// Whether a character spells one of the registered operators.
pub fn is_operator_char(c: char) -> bool {
    OPERATORS.contains_key(&c)
}
