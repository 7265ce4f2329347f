//! Tree-walking evaluator for the Solvent expression engine.
//!
//! Evaluation is a pure post-order walk over an owned tree: children are
//! computed before the parent combines them, and no node is ever mutated,
//! so the same tree can be evaluated any number of times.

pub mod error;
pub mod evaluator;
pub mod functions;

pub use error::EvalError;
pub use evaluator::eval;
pub use functions::dispatch;
