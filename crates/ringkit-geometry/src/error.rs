//! Error types for geometry operations
//!
//! Almost every operation in this crate is total over finite inputs. The
//! variants here cover the few precondition violations that would otherwise
//! leak NaN into downstream geometry.

/// Errors that can occur in checked geometry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A zero-length vector has no direction
    ZeroLength,

    /// An input to a checked operation was NaN or infinite
    NonFinite {
        /// The operation that rejected its input
        op: &'static str,
    },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "zero-length vector has no direction"),
            Self::NonFinite { op } => write!(f, "non-finite input to '{}'", op),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type alias for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GeometryError::ZeroLength.to_string(),
            "zero-length vector has no direction"
        );
        assert_eq!(
            GeometryError::NonFinite { op: "normalize" }.to_string(),
            "non-finite input to 'normalize'"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(GeometryError::ZeroLength, GeometryError::ZeroLength);
        assert_ne!(
            GeometryError::NonFinite { op: "a" },
            GeometryError::NonFinite { op: "b" }
        );
    }
}
