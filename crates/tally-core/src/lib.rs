//! # tally-core
//!
//! Domain layer: posts and their reaction state, blog categories, ledger
//! transactions, the statistics aggregation, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod aggregation;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use aggregation::{CategoryTotal, ExpenseStats, MonthlyTotals};
pub use entities::{
    Author, Category, Post, PostDetails, ReactionKind, ReactionOutcome, Transaction,
    TransactionChanges, TransactionFilter, TransactionKind, EXPENSE_CATEGORIES,
    INCOME_CATEGORIES,
};
pub use error::DomainError;
pub use traits::{
    AuthorRepository, CategoryRepository, PostRepository, RepoResult, TransactionRepository,
};
pub use value_objects::{CategoryId, IdParseError, MonthKey, PostId, TransactionId, UserId};
