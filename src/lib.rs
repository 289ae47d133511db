//! # Book Manager Library
//!
//! A CRUD service for a catalogue of books:
//! - RESTful HTTP API under `/api/v1/book`
//! - PostgreSQL or in-memory storage behind a repository trait
//! - Health probes and Prometheus metrics
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The `Book` entity and the repository trait
//! - **Application Layer**: `BookService` and DTOs
//! - **Infrastructure Layer**: Database pool, repositories, metrics
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! book_manager/
//! +-- config/         Configuration management
//! +-- domain/         Book entity and repository trait
//! +-- application/    Book service and DTOs
//! +-- infrastructure/ Database, repositories and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
