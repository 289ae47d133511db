//! Repository Implementations
//!
//! Concrete implementations of the domain `BookRepository` trait.
//!
//! ## Available Repositories
//!
//! - **PgBookRepository** - PostgreSQL-backed storage (`books` table)
//! - **InMemoryBookRepository** - process-local storage for tests and demos
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use book_manager::infrastructure::repositories::{InMemoryBookRepository, PgBookRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let pg_repo = PgBookRepository::new(pool);
//!     let memory_repo = InMemoryBookRepository::new();
//! }
//! ```

pub mod book_repository;
pub mod memory_book_repository;

pub use book_repository::PgBookRepository;
pub use memory_book_repository::InMemoryBookRepository;
