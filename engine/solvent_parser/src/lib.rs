//! Shunting-yard parser for the Solvent expression engine.
//!
//! Two output modes share one control flow: [`parser`] builds an expression
//! tree, [`rpn`] renders the same reduction order as a flat postfix string.

pub mod error;
pub mod parser;
pub mod rpn;

pub use error::ParseError;
pub use parser::{parse, parse_tokens};
pub use rpn::to_postfix;
