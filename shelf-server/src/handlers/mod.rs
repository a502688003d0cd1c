//! Request handlers
//!
//! `library` is the JSON API, `page` the browser UI and `sync` the event
//! stream. The health check sits here, outside all three.

mod library;
pub mod page;
mod sync;

pub use library::*;
pub use sync::*;

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Liveness report
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Number of books currently on the shelf
    pub books: usize,
}

/// Report that the server is up, along with the library size
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let books = state.library.read().await.len();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        books,
    })
}
