//! Server-Sent Events handler for real-time updates

use crate::state::{AppState, ServerEvent};
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// SSE endpoint for real-time updates
pub async fn sync_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe();
    let stream = BroadcastStream::new(rx);

    let event_stream = stream.filter_map(|result| match result {
        Ok(event) => {
            let (event_type, data) = event_payload(&event);
            Some(Ok(Event::default().event(event_type).data(data)))
        }
        Err(_) => None, // Lagged, skip
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}

/// SSE event name and JSON data for a server event
pub fn event_payload(event: &ServerEvent) -> (&'static str, String) {
    match event {
        ServerEvent::BookAdded { id, title } => (
            "book_added",
            serde_json::json!({ "id": id, "title": title }).to_string(),
        ),
        ServerEvent::BookRemoved { id } => {
            ("book_removed", serde_json::json!({ "id": id }).to_string())
        }
        ServerEvent::ReadToggled { id, read } => (
            "read_toggled",
            serde_json::json!({ "id": id, "read": read }).to_string(),
        ),
    }
}
