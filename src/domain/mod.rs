//! # Domain Layer
//!
//! The domain layer contains the book catalogue's core types.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: The `Book` entity, its `Genre` classification and the
//!   `BookRepository` data access contract
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate domain behavior

pub mod entities;

// Re-export commonly used types
pub use entities::*;
