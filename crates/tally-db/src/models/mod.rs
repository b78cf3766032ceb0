//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod post;
mod transaction;

pub use category::CategoryModel;
pub use post::{PostDetailsModel, PostModel};
pub use transaction::TransactionModel;
