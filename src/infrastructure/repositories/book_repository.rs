//! Book Repository Implementation
//!
//! PostgreSQL implementation of the BookRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Book, BookDetails, BookId, BookRepository, Genre};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Database row representation matching the books table schema.
#[derive(Debug, sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    description: String,
    author: String,
    genre: String, // VARCHAR column holding the genre name
}

impl BookRow {
    /// Convert database row to domain Book entity.
    fn into_book(self) -> Result<Book, AppError> {
        let genre: Genre = self
            .genre
            .parse()
            .map_err(|e| AppError::Internal(format!("book {}: {}", self.id, e)))?;

        Ok(Book {
            id: self.id,
            title: self.title,
            description: self.description,
            author: self.author,
            genre,
        })
    }
}

fn observe(operation: &str, started: Instant) {
    metrics::record_db_query(operation, "books", started.elapsed().as_secs_f64());
}

/// PostgreSQL book repository implementation.
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    /// Create a new PgBookRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    /// Find all books, ordered by id.
    async fn find_all(&self) -> Result<Vec<Book>, AppError> {
        let started = Instant::now();
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, description, author, genre
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        observe("find_all", started);

        rows.into_iter().map(BookRow::into_book).collect()
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, description, author, genre
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        observe("find_by_id", started);

        row.map(BookRow::into_book).transpose()
    }

    /// Upsert keyed by id.
    ///
    /// When the saved id is beyond every id the sequence has handed out, the
    /// sequence is advanced to it in the same transaction so later `insert`
    /// calls never reuse it. The sequence is never moved backwards.
    async fn save(&self, book: &Book) -> Result<Book, AppError> {
        let started = Instant::now();
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (id, title, description, author, genre)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                description = EXCLUDED.description,
                author = EXCLUDED.author,
                genre = EXCLUDED.genre,
                updated_at = NOW()
            RETURNING id, title, description, author, genre
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.description)
        .bind(&book.author)
        .bind(book.genre.as_str())
        .fetch_one(&mut *tx)
        .await?;

        // Only ever moves the sequence forward; updates of assigned ids leave it alone.
        sqlx::query(
            r#"
            SELECT setval('books_id_seq', $1)
            FROM books_id_seq
            WHERE $1 > CASE WHEN is_called THEN last_value ELSE last_value - 1 END
            "#,
        )
        .bind(book.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        observe("save", started);

        row.into_book()
    }

    async fn insert(&self, details: &BookDetails) -> Result<Book, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (title, description, author, genre)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, author, genre
            "#,
        )
        .bind(&details.title)
        .bind(&details.description)
        .bind(&details.author)
        .bind(details.genre.as_str())
        .fetch_one(&self.pool)
        .await?;
        observe("insert", started);

        row.into_book()
    }

    async fn delete_by_id(&self, id: BookId) -> Result<bool, AppError> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        observe("delete_by_id", started);

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let started = Instant::now();
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        observe("count", started);

        Ok(result.0)
    }

    async fn exists_by_id(&self, id: BookId) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}
