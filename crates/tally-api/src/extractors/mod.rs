//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, typed path ids and
//! ledger filters.

mod auth;
mod filter;
mod path;
mod validated;

pub use auth::AuthUser;
pub use filter::LedgerFilter;
pub use path::IdPath;
pub use validated::ValidatedJson;
