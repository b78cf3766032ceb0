//! Value objects - immutable types that represent domain concepts

mod ids;
mod month;

pub use ids::{CategoryId, IdParseError, PostId, TransactionId, UserId};
pub use month::MonthKey;
