//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in tally-core.
//! Each repository handles database operations for a specific domain entity.

mod author;
mod category;
mod error;
mod post;
mod transaction;

pub use author::PgAuthorRepository;
pub use category::PgCategoryRepository;
pub use post::PgPostRepository;
pub use transaction::PgTransactionRepository;
