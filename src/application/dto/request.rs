//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::CreateBookDto;
use crate::domain::{BookDetails, BookId, Genre};

/// Create or update book request.
///
/// Same shape as the Book JSON; `id` is optional on create and, when given on
/// update, must match the path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookRequest {
    #[serde(default)]
    pub id: Option<BookId>,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 10000, message = "Description must be at most 10000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 255, message = "Author must be 1-255 characters"))]
    pub author: String,

    pub genre: Genre,
}

impl BookRequest {
    /// Every field except the id.
    pub fn details(&self) -> BookDetails {
        BookDetails {
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            genre: self.genre,
        }
    }
}

impl From<BookRequest> for CreateBookDto {
    fn from(request: BookRequest) -> Self {
        let details = request.details();
        CreateBookDto {
            id: request.id,
            details,
        }
    }
}
