use thiserror::Error;

/// Errors surfaced while computing a value from an expression tree.
/// Evaluation is all-or-nothing; no partial result accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A literal token's text does not parse as a number, e.g. `1.2.3`.
    #[error("'{lexeme}' is not a valid number")]
    NumericFormat {
        /// The literal text as written in the source
        lexeme: String,
    },

    /// A bare variable reached evaluation; the core engine provides no
    /// binding environment.
    #[error("unknown symbol '{name}'")]
    UnknownSymbol {
        /// The symbol as written in the source
        name: String,
    },

    /// A function name resolved in neither the built-in registry nor the
    /// math provider (or was called with an arity the provider does not
    /// offer). Always carries the name as originally requested.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// The function name as written in the source
        name: String,
    },
}
