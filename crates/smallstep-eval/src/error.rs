//! Runtime error types for the reduction engine.
//!
//! Every error is terminal for the run that produced it: the machine aborts
//! immediately, with the offending variable or term named in the payload.

use thiserror::Error;

/// Evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A `Variable` was reduced whose name has no binding.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),
    /// `reduce` was called on a value or no-op. The machine checks
    /// `is_reducible` before every step, so this indicates a caller bug.
    #[error("cannot reduce irreducible term: {0}")]
    IrreducibleTerm(String),
    /// A compute step found a value of the wrong kind, e.g. a boolean
    /// operand to `+` or a numeric `if` condition.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// `+` or `*` overflowed the integer value range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(String),
}

/// Result alias for reduction operations.
pub type EvalResult<T> = Result<T, EvalError>;
