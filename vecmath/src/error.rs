use thiserror::Error;

/// Faults raised at the point a vector is misused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("component index {index} is out of range for a {dimension}-dimensional vector")]
    IndexOutOfRange { index: usize, dimension: usize },

    /// A source sequence was shorter than the vector being built from it.
    #[error("expected at least {expected} components, got {actual}")]
    Shape { expected: usize, actual: usize },

    /// Integral division where a divisor component was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Signed integral division whose quotient does not fit, `MIN / -1`.
    #[error("integer overflow in division")]
    Overflow,
}

pub type Result<T> = core::result::Result<T, VectorError>;
