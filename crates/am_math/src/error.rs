use thiserror::Error;

/// Errors produced by the symbolic engine.
///
/// Every variant is recoverable: the solve dispatcher converts them into a
/// user-visible `Error: ...` string and never lets them escape further.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("could not parse '{0}'")]
    Parse(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("division by zero")]
    DivisionByZero,

    #[error("expression contains the free variable and is not a plain number")]
    NotNumeric,

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("value too large")]
    Overflow,
}
