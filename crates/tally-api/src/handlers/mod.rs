//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod categories;
pub mod expenses;
pub mod health;
pub mod posts;
