//! Book Service
//!
//! Orchestrates repository calls for the book catalogue. Update and delete
//! look the record up first and fail with `NotFound` when it is absent.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Book, BookDetails, BookId, BookRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Book service trait defining catalogue operations.
#[async_trait]
pub trait BookService: Send + Sync {
    /// All books, exactly as the repository returns them.
    async fn get_all_books(&self) -> Result<Vec<Book>, BookError>;

    /// A single book by id.
    async fn get_book_by_id(&self, id: BookId) -> Result<Book, BookError>;

    /// Persist a new book and return the stored record.
    async fn insert_book(&self, request: CreateBookDto) -> Result<Book, BookError>;

    /// Overwrite every field except the id of an existing book.
    async fn update_book_by_id(&self, id: BookId, details: BookDetails)
        -> Result<Book, BookError>;

    /// Delete a book and return the books that remain.
    async fn delete_book_by_id(&self, id: BookId) -> Result<Vec<Book>, BookError>;

    /// Number of stored books.
    async fn count_books(&self) -> Result<i64, BookError>;
}

/// Request DTO for creating a book.
///
/// When `id` is set the book is saved under that id (updating any record
/// already stored there); otherwise storage assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookDto {
    pub id: Option<BookId>,
    pub details: BookDetails,
}

impl From<Book> for CreateBookDto {
    fn from(book: Book) -> Self {
        Self {
            id: Some(book.id),
            details: book.details(),
        }
    }
}

/// Book service errors.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    #[error("Book {0} not found")]
    NotFound(BookId),

    /// Details that pass request validation but are still unusable,
    /// such as a title of only whitespace.
    #[error("Invalid book: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<AppError> for BookError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation { message, .. } => BookError::Validation(message),
            other => BookError::Storage(other.to_string()),
        }
    }
}

impl BookError {
    fn outcome(&self) -> &'static str {
        match self {
            BookError::NotFound(_) => "not_found",
            BookError::Validation(_) => "invalid",
            BookError::Storage(_) => "error",
        }
    }
}

/// Rejects details whose required text is blank once trimmed.
fn check_details(details: &BookDetails) -> Result<(), BookError> {
    for (field, value) in [("title", &details.title), ("author", &details.author)] {
        if value.trim().is_empty() {
            return Err(BookError::Validation(format!("{field} must not be blank")));
        }
    }
    Ok(())
}

fn record<T>(operation: &str, result: &Result<T, BookError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::record_book_operation(operation, outcome);
}

/// Book service implementation.
pub struct BookServiceImpl<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> BookServiceImpl<R>
where
    R: BookRepository,
{
    /// Create a new BookServiceImpl.
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    async fn find_existing(&self, id: BookId) -> Result<Book, BookError> {
        self.book_repo
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id))
    }

    async fn create(&self, request: CreateBookDto) -> Result<Book, BookError> {
        check_details(&request.details)?;
        let book = match request.id {
            Some(id) => {
                let book = Book::from_details(id, request.details);
                self.book_repo.save(&book).await?
            }
            None => self.book_repo.insert(&request.details).await?,
        };
        Ok(book)
    }

    async fn overwrite(&self, id: BookId, details: BookDetails) -> Result<Book, BookError> {
        check_details(&details)?;
        let mut book = self.find_existing(id).await?;
        book.apply(details);
        Ok(self.book_repo.save(&book).await?)
    }

    async fn remove(&self, id: BookId) -> Result<Vec<Book>, BookError> {
        let book = self.find_existing(id).await?;
        self.book_repo.delete_by_id(book.id).await?;
        Ok(self.book_repo.find_all().await?)
    }
}

#[async_trait]
impl<R> BookService for BookServiceImpl<R>
where
    R: BookRepository + 'static,
{
    async fn get_all_books(&self) -> Result<Vec<Book>, BookError> {
        tracing::debug!("Listing all books");
        let result = self.book_repo.find_all().await.map_err(BookError::from);
        record("get_all_books", &result);
        result
    }

    async fn get_book_by_id(&self, id: BookId) -> Result<Book, BookError> {
        tracing::debug!(book_id = id, "Fetching book");
        let result = self.find_existing(id).await;
        record("get_book_by_id", &result);
        result
    }

    async fn insert_book(&self, request: CreateBookDto) -> Result<Book, BookError> {
        let result = self.create(request).await;

        if let Ok(book) = &result {
            tracing::info!(book_id = book.id, title = %book.title, "Book inserted");
        }
        record("insert_book", &result);
        result
    }

    async fn update_book_by_id(
        &self,
        id: BookId,
        details: BookDetails,
    ) -> Result<Book, BookError> {
        let result = self.overwrite(id, details).await;

        if result.is_ok() {
            tracing::info!(book_id = id, "Book updated");
        }
        record("update_book_by_id", &result);
        result
    }

    async fn delete_book_by_id(&self, id: BookId) -> Result<Vec<Book>, BookError> {
        let result = self.remove(id).await;

        if result.is_ok() {
            tracing::info!(book_id = id, "Book deleted");
        }
        record("delete_book_by_id", &result);
        result
    }

    async fn count_books(&self) -> Result<i64, BookError> {
        Ok(self.book_repo.count().await?)
    }
}
