use thiserror::Error;

/// An error that occurred while evaluating an expression for a feature.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Operator not supported by the evaluator.
    #[error("unknown expression operator '{operator}'")]
    UnknownOperator { operator: String },

    /// Wrong number of operands for an operator.
    #[error("'{operator}' expects {expected}, got {got} operands")]
    Arity {
        operator: String,
        expected: &'static str,
        got: usize,
    },

    /// Operand evaluated to a value of the wrong JSON type.
    #[error("'{operator}' expects a {expected} operand, got {found}")]
    TypeMismatch {
        operator: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Maximum nesting depth exceeded.
    #[error("maximum expression depth exceeded")]
    MaxDepthExceeded,
}
