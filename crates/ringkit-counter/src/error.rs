//! Error types for counter and indicator layout

/// Errors that can occur while laying out a counter or scroll indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// Progress was requested against a total of zero items
    EmptyTotal,

    /// The scrollable content has zero range
    EmptyScrollRange,
}

impl std::fmt::Display for CounterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTotal => write!(f, "progress total is zero"),
            Self::EmptyScrollRange => write!(f, "scroll range is zero"),
        }
    }
}

impl std::error::Error for CounterError {}

/// Result type alias for counter operations
pub type CounterResult<T> = Result<T, CounterError>;
