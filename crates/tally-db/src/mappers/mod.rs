//! Entity to model mappers
//!
//! Conversions between domain entities (tally-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Write` structs: Prepare entity data for binding into queries

mod category;
mod post;
mod transaction;

pub use post::PostWrite;
