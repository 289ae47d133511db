//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database connection pool and migrations (PostgreSQL)
//! - Book repositories (PostgreSQL, in-memory)
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
