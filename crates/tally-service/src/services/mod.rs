//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and orchestrates domain
//! operations over the repository ports.

pub mod category;
pub mod context;
pub mod error;
pub mod post;
pub mod transaction;

pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use transaction::TransactionService;
