//! Book API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{book, education_shelf, ids, TestApp};
use book_manager::domain::Genre;

/// Listing returns every stored book
#[tokio::test]
async fn test_get_all_books_returns_list_of_books() {
    let app = TestApp::with_books(education_shelf()).await;

    let (status, body) = app.get("/api/v1/book").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3]);
    assert_eq!(body[0]["genre"], "Education");
}

/// Empty store lists as an empty array
#[tokio::test]
async fn test_get_all_books_empty() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/book").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Created book can be read back by id
#[tokio::test]
async fn test_add_a_book_then_get_by_id() {
    let app = TestApp::new().await;
    let four = serde_json::to_value(book(4, "Four", Genre::Fantasy)).unwrap();

    let (status, created) = app.post_json("/api/v1/book", &four.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, four);

    let (status, fetched) = app.get("/api/v1/book/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, four);
}

/// Omitted id is assigned by storage
#[tokio::test]
async fn test_add_a_book_without_id() {
    let app = TestApp::with_books(education_shelf()).await;
    let body = json!({
        "title": "Untitled",
        "description": "No id given",
        "author": "Anonymous",
        "genre": "Mystery"
    });

    let (status, created) = app.post_json("/api/v1/book", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);
    assert_eq!(app.count().await, 4);
}

/// Unknown id is a 404
#[tokio::test]
async fn test_get_book_by_id_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/book/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 10001);
    assert_eq!(body["message"], "Book 999 not found");
}

/// Non-integer ids are rejected before reaching the service
#[tokio::test]
async fn test_get_book_with_invalid_id() {
    let app = TestApp::with_books(education_shelf()).await;

    let (status, _) = app.get("/api/v1/book/1L").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// PUT with a body replaces all fields and keeps the id
#[tokio::test]
async fn test_update_book_by_id() {
    let app = TestApp::with_books(vec![book(5, "Five", Genre::Fantasy)]).await;
    let update = json!({
        "title": "Book Five, Second Edition",
        "description": "Revised",
        "author": "Person Five",
        "genre": "History"
    });

    let (status, updated) = app.put_json("/api/v1/book/5", &update.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 5);
    assert_eq!(updated["title"], "Book Five, Second Edition");

    let (_, fetched) = app.get("/api/v1/book/5").await;
    assert_eq!(fetched, updated);
    assert_eq!(app.count().await, 1);
}

/// Updating an absent book is a 404 and creates nothing
#[tokio::test]
async fn test_update_missing_book() {
    let app = TestApp::new().await;
    let update = serde_json::to_value(book(8, "Eight", Genre::Horror)).unwrap();

    let (status, _) = app.put_json("/api/v1/book/8", &update.to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.count().await, 0);
}

/// Body id must agree with the path id
#[tokio::test]
async fn test_update_with_mismatched_id() {
    let app = TestApp::with_books(education_shelf()).await;
    let update = serde_json::to_value(book(2, "Two", Genre::Fiction)).unwrap();

    let (status, _) = app.put_json("/api/v1/book/1", &update.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// PUT with an empty JSON body deletes and returns the remaining books
#[tokio::test]
async fn test_put_without_body_deletes_and_returns_remaining() {
    let app = TestApp::with_books(education_shelf()).await;

    let (status, body) = app.put_json("/api/v1/book/1", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2, 3]);
    assert_eq!(app.count().await, 2);
}

/// A body of only whitespace counts as empty and also deletes
#[tokio::test]
async fn test_put_with_whitespace_body_deletes() {
    let app = TestApp::with_books(education_shelf()).await;

    let (status, body) = app.put_json("/api/v1/book/2", " \n\t ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 3]);
    assert_eq!(app.count().await, 2);
}

/// POST with an id that is already stored overwrites that record
#[tokio::test]
async fn test_add_book_with_existing_id_overwrites() {
    let app = TestApp::with_books(education_shelf()).await;
    let replacement = serde_json::to_value(book(2, "Two Reprinted", Genre::History)).unwrap();

    let (status, created) = app
        .post_json("/api/v1/book", &replacement.to_string())
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, replacement);
    assert_eq!(app.count().await, 3);

    let (_, fetched) = app.get("/api/v1/book/2").await;
    assert_eq!(fetched["title"], "Book Two Reprinted");
    assert_eq!(fetched["genre"], "History");
}

/// DELETE removes exactly one record
#[tokio::test]
async fn test_delete_book_by_id() {
    let app = TestApp::with_books(education_shelf()).await;

    let (status, body) = app.delete("/api/v1/book/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2, 3]);

    let (_, listing) = app.get("/api/v1/book").await;
    assert_eq!(ids(&listing), vec![2, 3]);
    assert_eq!(app.count().await, 2);
}

/// Deleting an absent book is a 404 and leaves the store unchanged
#[tokio::test]
async fn test_delete_missing_book() {
    let app = TestApp::with_books(education_shelf()).await;

    let (status, _) = app.delete("/api/v1/book/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.count().await, 3);
}

/// Unknown genre is a client error
#[tokio::test]
async fn test_add_book_with_unknown_genre() {
    let app = TestApp::new().await;
    let body = json!({
        "title": "Cookbook",
        "description": "Recipes",
        "author": "Chef",
        "genre": "Cooking"
    });

    let (status, _) = app.post_json("/api/v1/book", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.count().await, 0);
}

/// Validation failures report the offending field
#[tokio::test]
async fn test_add_book_with_empty_title() {
    let app = TestApp::new().await;
    let body = json!({
        "title": "",
        "description": "Nothing",
        "author": "Someone",
        "genre": "Fiction"
    });

    let (status, error) = app.post_json("/api/v1/book", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 10007);
    assert_eq!(error["errors"][0]["field"], "title");
}

/// Malformed JSON is rejected
#[tokio::test]
async fn test_add_book_with_malformed_json() {
    let app = TestApp::new().await;

    let (status, error) = app.post_json("/api/v1/book", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 10002);
}

/// A title of only spaces passes length checks but is still refused
#[tokio::test]
async fn test_add_book_with_blank_title() {
    let app = TestApp::new().await;
    let body = json!({
        "title": "   ",
        "description": "Nothing",
        "author": "Someone",
        "genre": "Fiction"
    });

    let (status, error) = app.post_json("/api/v1/book", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 10007);
    assert_eq!(app.count().await, 0);
}
