//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Book, BookId, Genre};

/// Book as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub author: String,
    pub genre: Genre,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            description: book.description,
            author: book.author,
            genre: book.genre,
        }
    }
}

/// Convert a listing into response DTOs, preserving order.
pub fn book_list(books: Vec<Book>) -> Vec<BookResponse> {
    books.into_iter().map(BookResponse::from).collect()
}
