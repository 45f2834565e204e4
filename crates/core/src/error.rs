//! Errors from checked vector operations.

use std::fmt;

/// Errors that can occur in checked vector operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// The vector has zero length and has no direction
    ZeroLength,
    /// The vector's length is infinite or NaN
    NonFinite {
        /// Length that was computed
        magnitude: f32,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::ZeroLength => write!(f, "Vector has zero length"),
            VectorError::NonFinite { magnitude } => {
                write!(f, "Vector length is not finite: {magnitude}")
            }
        }
    }
}

impl std::error::Error for VectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(VectorError::ZeroLength.to_string(), "Vector has zero length");
        assert_eq!(
            VectorError::NonFinite {
                magnitude: f32::INFINITY
            }
            .to_string(),
            "Vector length is not finite: inf"
        );
    }
}
