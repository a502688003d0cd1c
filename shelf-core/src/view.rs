//! Card view model derived from a library snapshot
//!
//! Front-ends regenerate the whole view after every mutation rather than
//! patching it, so these types are cheap plain data.

use crate::types::{Book, BookId};
use serde::Serialize;

/// Display state of one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub pages: String,
    pub read: bool,

    /// Style hook for the read button (`read-true` / `read-false`)
    pub status_class: &'static str,

    /// Label for the button that flips the read flag
    pub toggle_label: &'static str,
}

impl From<&Book> for BookCard {
    fn from(book: &Book) -> Self {
        let read = book.is_read();
        Self {
            id: book.id(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            pages: book.pages().to_string(),
            read,
            status_class: if read { "read-true" } else { "read-false" },
            toggle_label: if read { "Mark as Unread" } else { "Mark as Read" },
        }
    }
}

/// The full rendered library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LibraryView {
    pub cards: Vec<BookCard>,
    pub total: usize,
    pub read_count: usize,
}

impl LibraryView {
    pub fn from_books(books: &[Book]) -> Self {
        let cards: Vec<BookCard> = books.iter().map(BookCard::from).collect();
        let read_count = cards.iter().filter(|card| card.read).count();
        Self {
            total: cards.len(),
            read_count,
            cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
