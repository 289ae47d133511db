//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **BookService**: Book catalogue CRUD operations

pub mod book_service;

pub use book_service::{BookError, BookService, BookServiceImpl, CreateBookDto};
