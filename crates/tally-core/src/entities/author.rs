//! Author entity - the public profile shown next to a post

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Author profile
///
/// Populated from the bearer token's claims whenever the user writes a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    pub fn new(id: UserId, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
            updated_at: Utc::now(),
        }
    }
}
