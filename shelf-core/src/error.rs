//! Error types for Shelf Core

use crate::types::BookId;
use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Shelf operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors reported by the library store
///
/// None of these are fatal: the store is left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Book not found for ID: {0}")]
    NotFound(BookId),
}

/// Errors that occur while parsing user-supplied values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid book ID: {0}")]
    InvalidBookId(String),
}
