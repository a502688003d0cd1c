//! Shelf Core Library
//!
//! This crate provides the in-memory library store behind the Shelf reading tracker.
//! Front-ends own one [`Library`], mutate it through `add`, `remove` and `toggle_read`,
//! and re-render from a fresh snapshot after every change.

pub mod error;
pub mod library;
pub mod types;
pub mod view;

pub use error::{LibraryError, ParseError, Result, ShelfError};
pub use library::Library;
pub use types::{Book, BookId, Pages};
pub use view::{BookCard, LibraryView};
