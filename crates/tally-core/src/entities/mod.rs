//! Domain entities - core business objects

mod author;
mod category;
mod post;
mod transaction;

pub use author::Author;
pub use category::Category;
pub use post::{Post, PostDetails, ReactionKind, ReactionOutcome};
pub use transaction::{
    Transaction, TransactionChanges, TransactionFilter, TransactionKind, EXPENSE_CATEGORIES,
    INCOME_CATEGORIES,
};
