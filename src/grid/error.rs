//! Grid error types

use crate::color::ColorError;
use thiserror::Error;

/// Errors that can occur while laying out or rendering the house grid
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Square count is zero or not a perfect square
    #[error("Invalid square count: {0} (must be a positive perfect square)")]
    InvalidSquareCount(usize),

    /// Requested page does not exist
    #[error("Page {page} out of range (1..={pages})")]
    PageOutOfRange { page: usize, pages: usize },

    /// A house reading could not be colored
    #[error("House {house_id}: {source}")]
    Color {
        house_id: u32,
        #[source]
        source: ColorError,
    },
}

/// Result type alias for grid operations
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::PageOutOfRange { page: 4, pages: 3 };
        assert_eq!(err.to_string(), "Page 4 out of range (1..=3)");

        let err = GridError::InvalidSquareCount(50);
        assert_eq!(
            err.to_string(),
            "Invalid square count: 50 (must be a positive perfect square)"
        );
    }
}
