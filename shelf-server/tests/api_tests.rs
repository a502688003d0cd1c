//! Integration tests for the Shelf Server

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum_test::TestServer;
use futures::StreamExt;
use serde_json::{json, Value};
use std::time::Duration;
use shelf_core::{BookId, Library};
use shelf_server::config::ServerConfig;
use shelf_server::routes::create_router;
use shelf_server::state::{AppState, ServerEvent};
use tower::ServiceExt;

/// Create a test server over the given library, returning its state too
fn create_test_server(library: Library) -> (TestServer, AppState) {
    let state = AppState::new(library);
    let app = create_router(state.clone(), &ServerConfig::default());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, state)
}

const MISSING_ID: &str = "00000000-0000-0000-0000-000000000000";

#[tokio::test]
async fn test_health_check() {
    let (server, _state) = create_test_server(Library::with_sample_books());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
    assert_eq!(body["books"], 3);
}

#[tokio::test]
async fn test_list_books_empty() {
    let (server, _state) = create_test_server(Library::new());

    let response = server.get("/api/v1/library").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["books"].as_array().unwrap().len(), 0);
    assert_eq!(body["total"], 0);
    assert_eq!(body["read"], 0);
}

#[tokio::test]
async fn test_list_books_keeps_insertion_order() {
    let (server, _state) = create_test_server(Library::with_sample_books());

    let body: Value = server.get("/api/v1/library").await.json();
    let titles: Vec<&str> = body["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();

    assert_eq!(
        titles,
        vec![
            "The Hobbit",
            "1984",
            "Sapiens: A Brief History of Humankind"
        ]
    );
    assert_eq!(body["total"], 3);
    assert_eq!(body["read"], 2);
}

#[tokio::test]
async fn test_add_book() {
    let (server, state) = create_test_server(Library::new());

    let response = server
        .post("/api/v1/library")
        .json(&json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "pages": 412,
            "read": true
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["author"], "Frank Herbert");
    assert_eq!(body["pages"], 412);
    assert_eq!(body["read"], true);
    assert!(body["id"].is_string());

    assert_eq!(state.library.read().await.len(), 1);
}

#[tokio::test]
async fn test_add_book_coerces_text_pages() {
    let (server, _state) = create_test_server(Library::new());

    let numeric: Value = server
        .post("/api/v1/library")
        .json(&json!({ "title": "A", "author": "B", "pages": "328" }))
        .await
        .json();
    assert_eq!(numeric["pages"], 328);
    assert_eq!(numeric["read"], false);

    let malformed: Value = server
        .post("/api/v1/library")
        .json(&json!({ "title": "C", "author": "D", "pages": "many" }))
        .await
        .json();
    assert_eq!(malformed["pages"], "many");
}

#[tokio::test]
async fn test_add_book_accepts_any_scalar_pages() {
    let (server, state) = create_test_server(Library::new());

    for (pages, expected) in [
        (json!(328.0), json!(328)),
        (json!(3.9), json!(3)),
        (json!(null), json!("null")),
        (json!(true), json!("true")),
    ] {
        let response = server
            .post("/api/v1/library")
            .json(&json!({ "title": "T", "author": "A", "pages": pages }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["pages"], expected, "pages sent as {}", pages);
    }

    assert_eq!(state.library.read().await.len(), 4);
}

#[tokio::test]
async fn test_get_book() {
    let (server, state) = create_test_server(Library::with_sample_books());
    let id = state.library.read().await.books()[1].id();

    let response = server.get(&format!("/api/v1/library/{}", id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "1984");
}

#[tokio::test]
async fn test_get_book_invalid_uuid() {
    let (server, _state) = create_test_server(Library::new());

    let response = server.get("/api/v1/library/invalid-uuid").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["code"], "invalid_id");
}

#[tokio::test]
async fn test_get_book_not_found() {
    let (server, _state) = create_test_server(Library::new());

    let response = server.get(&format!("/api/v1/library/{}", MISSING_ID)).await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "not_found");
    assert!(body["message"].as_str().unwrap().contains(MISSING_ID));
}

#[tokio::test]
async fn test_delete_book() {
    let (server, state) = create_test_server(Library::with_sample_books());
    let id = state.library.read().await.books()[0].id();

    let response = server.delete(&format!("/api/v1/library/{}", id)).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let library = state.library.read().await;
    assert_eq!(library.len(), 2);
    assert!(library.get(id).is_none());
    assert_eq!(library.books()[0].title(), "1984");
}

#[tokio::test]
async fn test_delete_book_not_found_leaves_library() {
    let (server, state) = create_test_server(Library::with_sample_books());
    let before = state.library.read().await.snapshot();

    let response = server
        .delete(&format!("/api/v1/library/{}", MISSING_ID))
        .await;

    response.assert_status_not_found();
    assert_eq!(state.library.read().await.snapshot(), before);
}

#[tokio::test]
async fn test_delete_book_invalid_uuid() {
    let (server, _state) = create_test_server(Library::new());

    let response = server.delete("/api/v1/library/not-a-uuid").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_toggle_read() {
    let (server, state) = create_test_server(Library::with_sample_books());
    let id = state.library.read().await.books()[1].id();
    let path = format!("/api/v1/library/{}/toggle-read", id);

    let body: Value = server.post(&path).await.json();
    assert_eq!(body["read"], true);

    let body: Value = server.post(&path).await.json();
    assert_eq!(body["read"], false);
}

#[tokio::test]
async fn test_toggle_read_not_found() {
    let (server, _state) = create_test_server(Library::new());

    let response = server
        .post(&format!("/api/v1/library/{}/toggle-read", MISSING_ID))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_index_page_lists_cards() {
    let (server, _state) = create_test_server(Library::with_sample_books());

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<h3>The Hobbit</h3>"));
    assert!(html.contains("<h3>1984</h3>"));
    assert!(html.contains("action=\"/books\""));
}

#[tokio::test]
async fn test_form_submit_adds_book() {
    let (server, state) = create_test_server(Library::new());

    let response = server
        .post("/books")
        .form(&[
            ("title", "Dune"),
            ("author", "Frank Herbert"),
            ("pages", "412"),
            ("read", "on"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let library = state.library.read().await;
    let book = &library.books()[0];
    assert_eq!(book.title(), "Dune");
    assert_eq!(book.pages().count(), Some(412));
    assert!(book.is_read());
}

#[tokio::test]
async fn test_form_submit_unchecked_read_and_bad_pages() {
    let (server, state) = create_test_server(Library::new());

    server
        .post("/books")
        .form(&[("title", "Notes"), ("author", "Me"), ("pages", "lots")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let library = state.library.read().await;
    let book = &library.books()[0];
    assert!(!book.is_read());
    assert_eq!(book.pages().to_string(), "lots");
}

#[tokio::test]
async fn test_form_buttons() {
    let (server, state) = create_test_server(Library::with_sample_books());
    let id = state.library.read().await.books()[1].id();

    server
        .post(&format!("/books/{}/toggle-read", id))
        .await
        .assert_status(StatusCode::SEE_OTHER);
    assert_eq!(state.library.read().await.get(id).map(|b| b.is_read()), Some(true));

    server
        .post(&format!("/books/{}/remove", id))
        .await
        .assert_status(StatusCode::SEE_OTHER);
    assert!(state.library.read().await.get(id).is_none());

    // Removing again is a harmless no-op
    server
        .post(&format!("/books/{}/remove", id))
        .await
        .assert_status(StatusCode::SEE_OTHER);
    server
        .post("/books/garbage/toggle-read")
        .await
        .assert_status(StatusCode::SEE_OTHER);
    assert_eq!(state.library.read().await.len(), 2);
}

#[tokio::test]
async fn test_mutations_announce_events() {
    let (server, state) = create_test_server(Library::new());
    let mut rx = state.subscribe();

    let body: Value = server
        .post("/api/v1/library")
        .json(&json!({ "title": "1984", "author": "George Orwell", "pages": 328 }))
        .await
        .json();
    let id: BookId = body["id"].as_str().unwrap().parse().unwrap();

    server
        .delete(&format!("/api/v1/library/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(
        rx.try_recv().unwrap(),
        ServerEvent::BookAdded {
            id,
            title: "1984".to_string()
        }
    );
    assert_eq!(rx.try_recv().unwrap(), ServerEvent::BookRemoved { id });
}

#[tokio::test]
async fn test_sync_stream_delivers_added_book() {
    let app = create_router(AppState::new(Library::new()), &ServerConfig::default());

    let response = app
        .clone()
        .oneshot(Request::get("/api/v1/sync").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/event-stream"
    );

    let added = app
        .oneshot(
            Request::post("/api/v1/library")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "title": "Dune", "author": "Frank Herbert", "pages": 412 })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(added.status(), StatusCode::CREATED);

    let mut frames = response.into_body().into_data_stream();
    let frame = tokio::time::timeout(Duration::from_secs(5), frames.next())
        .await
        .expect("no event within 5s")
        .expect("stream ended")
        .unwrap();
    let text = String::from_utf8(frame.to_vec()).unwrap();

    assert!(text.contains("event: book_added"), "got {:?}", text);
    assert!(text.contains("\"title\":\"Dune\""), "got {:?}", text);
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let (server, _state) = create_test_server(Library::new());

    let orwell: Value = server
        .post("/api/v1/library")
        .json(&json!({ "title": "1984", "author": "George Orwell", "pages": 328, "read": false }))
        .await
        .json();
    let orwell_id = orwell["id"].as_str().unwrap().to_string();

    let toggled: Value = server
        .post(&format!("/api/v1/library/{}/toggle-read", orwell_id))
        .await
        .json();
    assert_eq!(toggled["read"], true);

    server
        .post("/api/v1/library")
        .json(&json!({ "title": "Dune", "author": "Frank Herbert", "pages": 412, "read": true }))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/api/v1/library").await.json();
    assert_eq!(body["books"][0]["title"], "1984");
    assert_eq!(body["books"][1]["title"], "Dune");

    server
        .delete(&format!("/api/v1/library/{}", orwell_id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body: Value = server.get("/api/v1/library").await.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["books"][0]["title"], "Dune");
    assert_eq!(body["books"][0]["read"], true);
}
