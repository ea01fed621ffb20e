//! Error types for planar operations.

use thiserror::Error;

/// Errors reported for inputs that violate a structural precondition.
///
/// Numeric degeneracies (equal interpolation bounds, zero-length segments)
/// are not errors: they produce IEEE-754 special values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A point sequence is shorter than the operation needs.
    #[error("expected at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum number of points the operation needs.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GeomError::TooFewPoints {
            required: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "expected at least 2 points, got 1");
    }
}
