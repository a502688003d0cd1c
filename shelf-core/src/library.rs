//! The library store
//!
//! An ordered list of books keyed by [`BookId`]. Lookups are linear scans;
//! a personal library is small enough that no index is kept.

use crate::error::LibraryError;
use crate::types::{Book, BookId, Pages};
use crate::view::LibraryView;

/// Ordered collection of books; insertion order is display order
#[derive(Debug, Default, Clone)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library seeded with a few well-known books
    pub fn with_sample_books() -> Self {
        let mut library = Self::new();
        library.add("The Hobbit", "J.R.R. Tolkien", Pages::Count(310), true);
        library.add("1984", "George Orwell", Pages::Count(328), false);
        library.add(
            "Sapiens: A Brief History of Humankind",
            "Yuval Noah Harari",
            Pages::Count(443),
            true,
        );
        library
    }

    /// Append a new book and return a copy of it
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: Pages,
        read: bool,
    ) -> Book {
        let book = Book::new(title, author, pages, read);
        tracing::info!(id = %book.id(), title = book.title(), "book added");
        self.books.push(book.clone());
        book
    }

    /// Remove the book with the given id, keeping the order of the rest
    ///
    /// An unknown id leaves the library untouched and is reported as
    /// [`LibraryError::NotFound`].
    pub fn remove(&mut self, id: BookId) -> Result<Book, LibraryError> {
        match self.position(id) {
            Some(index) => {
                let book = self.books.remove(index);
                tracing::info!(id = %id, title = book.title(), "book removed");
                Ok(book)
            }
            None => {
                tracing::error!(id = %id, "book not found for removal");
                Err(LibraryError::NotFound(id))
            }
        }
    }

    /// Flip the read flag of the book with the given id
    ///
    /// Returns the new value, or `None` (and changes nothing) for an unknown id.
    pub fn toggle_read(&mut self, id: BookId) -> Option<bool> {
        match self.books.iter_mut().find(|book| book.id() == id) {
            Some(book) => {
                let read = book.toggle_read();
                tracing::info!(id = %id, read, "read status toggled");
                Some(read)
            }
            None => {
                tracing::debug!(id = %id, "toggle ignored, book not found");
                None
            }
        }
    }

    /// Owned copy of the current contents, in display order
    pub fn snapshot(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Borrow the current contents, in display order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Build the card view of the current contents
    pub fn view(&self) -> LibraryView {
        LibraryView::from_books(&self.books)
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }
}
