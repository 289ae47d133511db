//! Book Handlers
//!
//! HTTP handlers for the `/api/v1/book` endpoints.

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::application::dto::request::BookRequest;
use crate::application::dto::response::{book_list, BookResponse};
use crate::application::services::{BookError, CreateBookDto};
use crate::presentation::http::extractors::{validated_from_slice, BookIdPath, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Helper to convert BookError to AppError
fn map_book_error(e: BookError) -> AppError {
    match e {
        BookError::NotFound(id) => AppError::NotFound(format!("Book {} not found", id)),
        BookError::Validation(msg) => AppError::validation(msg),
        BookError::Storage(msg) => AppError::Internal(msg),
    }
}

/// List all books
///
/// GET /api/v1/book
pub async fn get_all_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let books = state.books.get_all_books().await.map_err(map_book_error)?;

    Ok(Json(book_list(books)))
}

/// Get a book by id
///
/// GET /api/v1/book/{id}
///
/// ## Errors
/// - 400: id is not an integer
/// - 404: no book with this id
pub async fn get_book_by_id(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
) -> Result<Json<BookResponse>, AppError> {
    let book = state
        .books
        .get_book_by_id(id)
        .await
        .map_err(map_book_error)?;

    Ok(Json(book.into()))
}

/// Create a book
///
/// POST /api/v1/book
///
/// ## Request Body
/// Book JSON. `id` is optional; when omitted storage assigns one.
pub async fn add_book(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    let book = state
        .books
        .insert_book(CreateBookDto::from(body))
        .await
        .map_err(map_book_error)?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// Update a book, or delete it when the body is empty
///
/// PUT /api/v1/book/{id}
///
/// A JSON body replaces every field except the id and returns the updated
/// book. An empty body deletes the book and returns the remaining listing,
/// the same as `DELETE`.
///
/// ## Errors
/// - 400: malformed body, failed validation, or body id differs from path id
/// - 404: no book with this id
pub async fn update_book_by_id(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
    body: Bytes,
) -> Result<axum::response::Response, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!(book_id = id, "Empty PUT body, deleting book");
        let remaining = state
            .books
            .delete_book_by_id(id)
            .await
            .map_err(map_book_error)?;
        return Ok(Json(book_list(remaining)).into_response());
    }

    let request: BookRequest = validated_from_slice(&body)?;
    if request.id.is_some_and(|body_id| body_id != id) {
        return Err(AppError::BadRequest(
            "Book id in body does not match path".into(),
        ));
    }

    let book = state
        .books
        .update_book_by_id(id, request.details())
        .await
        .map_err(map_book_error)?;

    Ok(Json(BookResponse::from(book)).into_response())
}

/// Delete a book
///
/// DELETE /api/v1/book/{id}
///
/// Returns the books remaining after the deletion.
pub async fn delete_book_by_id(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let remaining = state
        .books
        .delete_book_by_id(id)
        .await
        .map_err(map_book_error)?;

    Ok(Json(book_list(remaining)))
}
