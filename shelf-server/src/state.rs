//! Application state

use crate::config::ServerConfig;
use shelf_core::{Book, BookId, Library, LibraryError, Pages};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The one library this server presents
    pub library: Arc<RwLock<Library>>,

    /// Channel for SSE events
    pub event_tx: broadcast::Sender<ServerEvent>,
}

/// Server-sent events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// A book was added
    BookAdded { id: BookId, title: String },

    /// A book was removed
    BookRemoved { id: BookId },

    /// A book's read flag was flipped
    ReadToggled { id: BookId, read: bool },
}

impl AppState {
    /// Wrap an existing library
    pub fn new(library: Library) -> Self {
        let (event_tx, _) = broadcast::channel(100);
        Self {
            library: Arc::new(RwLock::new(library)),
            event_tx,
        }
    }

    /// Create state with a fresh library, seeded if configured
    pub fn from_config(config: &ServerConfig) -> Self {
        let library = if config.seed_samples {
            Library::with_sample_books()
        } else {
            Library::new()
        };
        Self::new(library)
    }

    // Events go out under the write guard: event order is store order.

    /// Add a book and announce it
    pub async fn add_book(&self, title: String, author: String, pages: Pages, read: bool) -> Book {
        let mut library = self.library.write().await;
        let book = library.add(title, author, pages, read);
        self.broadcast(ServerEvent::BookAdded {
            id: book.id(),
            title: book.title().to_string(),
        });
        book
    }

    /// Remove a book and announce it; unknown ids change nothing
    pub async fn remove_book(&self, id: BookId) -> Result<Book, LibraryError> {
        let mut library = self.library.write().await;
        let book = library.remove(id)?;
        self.broadcast(ServerEvent::BookRemoved { id });
        Ok(book)
    }

    /// Flip a book's read flag and announce it; unknown ids change nothing
    pub async fn toggle_read(&self, id: BookId) -> Option<Book> {
        let mut library = self.library.write().await;
        let read = library.toggle_read(id)?;
        self.broadcast(ServerEvent::ReadToggled { id, read });
        library.get(id).cloned()
    }

    /// Subscribe to server events
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event
    pub fn broadcast(&self, event: ServerEvent) {
        // Ignore errors (no subscribers)
        let _ = self.event_tx.send(event);
    }
}
