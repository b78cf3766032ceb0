//! # tally-db
//!
//! Persistence layer implementing the repository traits from `tally-core`.
//!
//! ## Overview
//!
//! Two backends are provided:
//!
//! - PostgreSQL via SQLx (`repositories`), with `FromRow` models and
//!   entity ↔ model mappers. The schema lives in `schema.sql` next to this
//!   crate's manifest and is applied out of band.
//! - An in-memory backend (`memory`) over `DashMap` tables.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_db::{create_pool, DatabaseConfig, PgPostRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgres://localhost/tally", 10, 1);
//!     let pool = create_pool(&config).await?;
//!     let posts = PgPostRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{
    MemoryAuthorRepository, MemoryCategoryRepository, MemoryPostRepository, MemoryStore,
    MemoryTransactionRepository,
};
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgAuthorRepository, PgCategoryRepository, PgPostRepository, PgTransactionRepository,
};
