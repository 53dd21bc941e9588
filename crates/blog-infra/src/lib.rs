//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM; without it only the
//!   in-memory repository is available

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryBlogRepository};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{DbPool, PostgresBlogRepository};
