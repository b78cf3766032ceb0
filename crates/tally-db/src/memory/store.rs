//! Shared in-memory tables

use std::sync::Arc;

use dashmap::DashMap;
use tally_core::entities::{Author, Category, Post, Transaction};
use tally_core::value_objects::{CategoryId, PostId, TransactionId, UserId};

/// Process-local tables shared by the memory repositories
///
/// Post writes hold the entry's shard lock for the whole compare-and-swap, so
/// a version check and the write that follows it cannot interleave with
/// another writer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) posts: DashMap<PostId, Post>,
    pub(crate) authors: DashMap<UserId, Author>,
    pub(crate) categories: DashMap<CategoryId, Category>,
    pub(crate) transactions: DashMap<TransactionId, Transaction>,
}

impl MemoryStore {
    /// Create an empty shared store
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}
