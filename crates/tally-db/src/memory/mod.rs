//! In-memory repository implementations
//!
//! Backed by [`DashMap`](dashmap::DashMap) tables in a shared [`MemoryStore`].
//! Data lives as long as the process. Used as the default backend and by
//! service tests.

mod catalog;
mod post;
mod store;
mod transaction;

pub use catalog::{MemoryAuthorRepository, MemoryCategoryRepository};
pub use post::MemoryPostRepository;
pub use store::MemoryStore;
pub use transaction::MemoryTransactionRepository;
