//! Book entity and repository trait.
//!
//! Maps to the `books` table in the database schema.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Book identifier, assigned by storage on creation.
pub type BookId = i64;

/// Closed classification of a book.
///
/// Stored as `VARCHAR(32)` using the same names that appear in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Education,
    Fantasy,
    Fiction,
    Horror,
    Mystery,
    Romance,
    ScienceFiction,
    Thriller,
    Biography,
    History,
}

impl Genre {
    /// Every genre, in declaration order.
    pub const ALL: [Genre; 10] = [
        Genre::Education,
        Genre::Fantasy,
        Genre::Fiction,
        Genre::Horror,
        Genre::Mystery,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::Thriller,
        Genre::Biography,
        Genre::History,
    ];

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Fantasy => "Fantasy",
            Self::Fiction => "Fiction",
            Self::Horror => "Horror",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::ScienceFiction => "ScienceFiction",
            Self::Thriller => "Thriller",
            Self::Biography => "Biography",
            Self::History => "History",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known genre.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre: {0}")]
pub struct ParseGenreError(pub String);

impl FromStr for Genre {
    type Err = ParseGenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Education" => Ok(Self::Education),
            "Fantasy" => Ok(Self::Fantasy),
            "Fiction" => Ok(Self::Fiction),
            "Horror" => Ok(Self::Horror),
            "Mystery" => Ok(Self::Mystery),
            "Romance" => Ok(Self::Romance),
            "ScienceFiction" => Ok(Self::ScienceFiction),
            "Thriller" => Ok(Self::Thriller),
            "Biography" => Ok(Self::Biography),
            "History" => Ok(Self::History),
            other => Err(ParseGenreError(other.to_string())),
        }
    }
}

/// All replaceable fields of a book, i.e. everything except its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub title: String,
    pub description: String,
    pub author: String,
    pub genre: Genre,
}

/// Represents a book in the catalogue.
///
/// Maps to the `books` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: VARCHAR(255) NOT NULL
/// - description: TEXT NOT NULL
/// - author: VARCHAR(255) NOT NULL
/// - genre: VARCHAR(32) NOT NULL
/// - created_at / updated_at: TIMESTAMPTZ (not exposed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Storage-assigned identifier, immutable once assigned
    pub id: BookId,

    /// Short text label
    pub title: String,

    /// Free text
    pub description: String,

    /// Name of the creator
    pub author: String,

    /// Classification
    pub genre: Genre,
}

impl Book {
    /// Build a book from an id and its details.
    pub fn from_details(id: BookId, details: BookDetails) -> Self {
        Self {
            id,
            title: details.title,
            description: details.description,
            author: details.author,
            genre: details.genre,
        }
    }

    /// Copy of everything except the id.
    pub fn details(&self) -> BookDetails {
        BookDetails {
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            genre: self.genre,
        }
    }

    /// Overwrite every field except the id.
    pub fn apply(&mut self, details: BookDetails) {
        self.title = details.title;
        self.description = details.description;
        self.author = details.author;
        self.genre = details.genre;
    }
}

/// Repository trait for Book data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All persisted books.
    async fn find_all(&self) -> Result<Vec<Book>, AppError>;

    /// Find a book by its id.
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, AppError>;

    /// Insert the book, or update it if a record with its id exists.
    async fn save(&self, book: &Book) -> Result<Book, AppError>;

    /// Insert a new book, letting storage assign the id.
    async fn insert(&self, details: &BookDetails) -> Result<Book, AppError>;

    /// Delete a book by id. Absent ids are a no-op; returns whether a record was removed.
    async fn delete_by_id(&self, id: BookId) -> Result<bool, AppError>;

    /// Number of persisted books.
    async fn count(&self) -> Result<i64, AppError>;

    /// Check if a book with this id exists.
    async fn exists_by_id(&self, id: BookId) -> Result<bool, AppError>;
}
