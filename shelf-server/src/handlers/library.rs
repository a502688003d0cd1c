//! JSON API over the library store

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use shelf_core::{Book, BookId, LibraryError, Pages};

/// List response
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<Book>,
    pub total: usize,
    pub read: usize,
}

/// List all books in display order
pub async fn list_books(State(state): State<AppState>) -> Json<ListBooksResponse> {
    let books = state.library.read().await.snapshot();
    let read = books.iter().filter(|book| book.is_read()).count();

    Json(ListBooksResponse {
        total: books.len(),
        read,
        books,
    })
}

/// Request body for adding a book
#[derive(Debug, Deserialize)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,

    /// Any JSON scalar; see `Pages` for how it is coerced
    pub pages: Pages,

    #[serde(default)]
    pub read: bool,
}

/// Add a book
pub async fn add_book(
    State(state): State<AppState>,
    Json(request): Json<AddBookRequest>,
) -> (StatusCode, Json<Book>) {
    let book = state
        .add_book(
            request.title,
            request.author,
            request.pages,
            request.read,
        )
        .await;
    (StatusCode::CREATED, Json(book))
}

/// Get a single book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id: BookId = id.parse()?;
    let library = state.library.read().await;
    let book = library.get(id).cloned().ok_or(LibraryError::NotFound(id))?;
    Ok(Json(book))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: BookId = id.parse()?;
    state.remove_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flip a book's read flag and return the updated book
pub async fn toggle_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id: BookId = id.parse()?;
    let book = state
        .toggle_read(id)
        .await
        .ok_or(LibraryError::NotFound(id))?;
    Ok(Json(book))
}
