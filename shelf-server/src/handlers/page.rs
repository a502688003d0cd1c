//! HTML page and form handlers
//!
//! Every form post mutates the store and redirects back to `/`, which
//! re-renders the whole library.

use crate::html::render_page;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use shelf_core::{BookId, Pages};

/// Render the library page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.library.read().await.view();
    Html(render_page(&view))
}

/// Fields of the "New Book" form
#[derive(Debug, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub pages: String,

    /// Present (usually `"on"`) only when the checkbox is ticked
    #[serde(default)]
    pub read: Option<String>,
}

/// Handle the "New Book" form
pub async fn submit_book(State(state): State<AppState>, Form(form): Form<BookForm>) -> Redirect {
    state
        .add_book(
            form.title,
            form.author,
            Pages::parse(&form.pages),
            form.read.is_some(),
        )
        .await;
    Redirect::to("/")
}

/// Handle a card's "toggle read" button
pub async fn toggle_read(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if let Some(id) = form_id(&id) {
        state.toggle_read(id).await;
    }
    Redirect::to("/")
}

/// Handle a card's "remove" button
pub async fn remove_book(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if let Some(id) = form_id(&id) {
        // Not found is already logged by the store
        let _ = state.remove_book(id).await;
    }
    Redirect::to("/")
}

fn form_id(id: &str) -> Option<BookId> {
    match id.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!("Ignoring form post: {}", e);
            None
        }
    }
}
