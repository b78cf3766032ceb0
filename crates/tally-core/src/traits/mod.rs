//! Repository ports

mod repositories;

pub use repositories::{
    AuthorRepository, CategoryRepository, PostRepository, RepoResult, TransactionRepository,
};
