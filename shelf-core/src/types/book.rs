//! The Book record and its identifier

use super::Pages;
use crate::error::ParseError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique, immutable key assigned to a book when it is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Generate a fresh random identifier
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BookId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ParseError::InvalidBookId(s.to_string()))
    }
}

/// One entry in the library
///
/// Books are only created by [`crate::Library::add`]. Everything except the
/// read flag is fixed after creation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    pages: Pages,
    read: bool,
    added_at: DateTime<Utc>,
}

impl Book {
    pub(crate) fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: Pages,
        read: bool,
    ) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            pages,
            read,
            added_at: Utc::now(),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    /// Whether the book has been read
    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Flip the read flag in place, returning the new value
    pub fn toggle_read(&mut self) -> bool {
        self.read = !self.read;
        self.read
    }
}
