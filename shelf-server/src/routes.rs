//! HTTP routes

use crate::config::{CorsPolicy, ServerConfig};
use crate::handlers::{self, page};
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the application router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = match &config.cors {
        CorsPolicy::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsPolicy::Origins(origins) => {
            let allowed: Vec<HeaderValue> =
                origins.iter().filter_map(|s| s.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let api_routes = Router::new()
        // Library endpoints
        .route(
            "/library",
            get(handlers::list_books).post(handlers::add_book),
        )
        .route(
            "/library/{id}",
            get(handlers::get_book).delete(handlers::delete_book),
        )
        .route("/library/{id}/toggle-read", post(handlers::toggle_read))
        // SSE endpoint
        .route("/sync", get(handlers::sync_events));

    let page_routes = Router::new()
        .route("/", get(page::index))
        .route("/books", post(page::submit_book))
        .route("/books/{id}/toggle-read", post(page::toggle_read))
        .route("/books/{id}/remove", post(page::remove_book));

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
