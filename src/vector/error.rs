//! Domain error definitions.

use thiserror::Error;

/// Errors produced while validating or computing vector operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// An input component is NaN or infinite.
    #[error("field `{field}` must be a finite number")]
    NonFiniteInput { field: String },

    /// The computation overflowed or otherwise left the finite range.
    #[error("{operation} produced a non-finite result")]
    NonFiniteResult { operation: &'static str },

    /// At least one operand is the zero vector.
    #[error("angle is undefined: zero vector has no direction")]
    UndefinedAngle,
}

/// Result type for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VectorError::NonFiniteInput { field: "Bx".into() };
        assert_eq!(err.to_string(), "field `Bx` must be a finite number");

        let err = VectorError::NonFiniteResult { operation: "sum" };
        assert!(err.to_string().starts_with("sum"));

        assert!(VectorError::UndefinedAngle.to_string().contains("zero vector"));
    }
}
