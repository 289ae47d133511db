//! # Domain Entities
//!
//! The catalogue has a single entity, **Book**, classified by a closed
//! **Genre** set. It maps directly to the `books` table.
//!
//! ## Repository Traits
//!
//! `BookRepository` defines the data access operations. It is implemented in
//! the infrastructure layer (PostgreSQL and in-memory), following the
//! dependency inversion principle.

mod book;

pub use book::{Book, BookDetails, BookId, BookRepository, Genre, ParseGenreError};

#[cfg(test)]
pub use book::MockBookRepository;
