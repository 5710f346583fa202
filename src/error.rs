//! Error types for regresar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for regresar operations.
///
/// Covers the four failure classes of the pipeline: shape mismatches,
/// invalid hyperparameters, numerical degeneracy, and use of unfitted
/// model state.
///
/// # Examples
///
/// ```
/// use regresar::error::RegresarError;
///
/// let err = RegresarError::DimensionMismatch {
///     expected: "names.len()=3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum RegresarError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Normal-equation matrix is singular or not positive definite.
    SingularMatrix {
        /// Side length of the offending square matrix
        size: usize,
    },

    /// Total sum of squares is zero; R² is undefined for a constant target.
    ConstantTarget,

    /// Model state was consumed before `fit` produced it.
    NotFitted,

    /// Input collection was empty where at least one element is required.
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RegresarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegresarError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            RegresarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            RegresarError::SingularMatrix { size } => {
                write!(
                    f,
                    "singular matrix: {size}x{size} normal-equation matrix is not positive definite"
                )
            }
            RegresarError::ConstantTarget => {
                write!(
                    f,
                    "constant target: total sum of squares is zero, R² is undefined"
                )
            }
            RegresarError::NotFitted => {
                write!(f, "model not fitted: call fit() before predict()")
            }
            RegresarError::EmptyInput { context } => {
                write!(f, "empty input: {context}")
            }
            RegresarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RegresarError {}

impl From<&str> for RegresarError {
    fn from(msg: &str) -> Self {
        RegresarError::Other(msg.to_string())
    }
}

impl From<String> for RegresarError {
    fn from(msg: String) -> Self {
        RegresarError::Other(msg)
    }
}

impl RegresarError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RegresarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = RegresarError::DimensionMismatch {
            expected: "4x3".to_string(),
            actual: "4x2".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("4x3"));
        assert!(err.to_string().contains("4x2"));
    }

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = RegresarError::InvalidHyperparameter {
            param: "degree".to_string(),
            value: "0".to_string(),
            constraint: ">= 1".to_string(),
        };
        assert!(err.to_string().contains("invalid hyperparameter"));
        assert!(err.to_string().contains("degree"));
        assert!(err.to_string().contains(">= 1"));
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = RegresarError::SingularMatrix { size: 6 };
        let msg = err.to_string();
        assert!(msg.contains("singular matrix"));
        assert!(msg.contains("6x6"));
    }

    #[test]
    fn test_constant_target_display() {
        let err = RegresarError::ConstantTarget;
        assert!(err.to_string().contains("sum of squares is zero"));
    }

    #[test]
    fn test_not_fitted_display() {
        let err = RegresarError::NotFitted;
        assert!(err.to_string().contains("not fitted"));
    }

    #[test]
    fn test_from_str() {
        let err: RegresarError = "test error".into();
        assert!(matches!(err, RegresarError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: RegresarError = "test error".to_string().into();
        assert!(matches!(err, RegresarError::Other(_)));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = RegresarError::dimension_mismatch("rows", 10, 5);
        let msg = err.to_string();
        assert!(msg.contains("rows=10"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_empty_input_helper() {
        let err = RegresarError::empty_input("target vector");
        let msg = err.to_string();
        assert!(msg.contains("empty input"));
        assert!(msg.contains("target vector"));
    }
}
