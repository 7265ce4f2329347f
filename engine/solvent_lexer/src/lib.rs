//! Solvent lexical analyzer module
//!
//! This module provides lexical analysis for the Solvent expression engine,
//! converting expression text into a stream of tokens for the parser.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classifier;
pub mod lexer;
pub mod ops;
pub mod token;

// Re-export the main types for convenience
pub use classifier::{classify, CharClass};
pub use lexer::tokenize;
pub use ops::{Associativity, Operator};
pub use token::{Token, TokenType};
