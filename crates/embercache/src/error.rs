//! Error types for embercache

use std::fmt;

/// Result type alias for embercache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by cache constructors.
///
/// Cache misses are not errors; lookups report them as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A capacity of zero was requested where at least one slot is required
    InvalidCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity => write!(f, "cache capacity must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidCapacity.to_string(),
            "cache capacity must be at least 1"
        );
    }
}
