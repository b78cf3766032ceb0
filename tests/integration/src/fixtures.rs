//! Test fixtures and data generators
//!
//! Request bodies and the response shapes the tests read back.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create category request
#[derive(Debug, Serialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn unique() -> Self {
        Self {
            name: format!("category{}", unique_suffix()),
        }
    }
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewPost {
    pub fn in_category(category: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Post {suffix}"),
            content: format!("Body of post {suffix}"),
            category: category.to_string(),
            image: None,
        }
    }
}

/// Create transaction request
#[derive(Debug, Serialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewTransaction {
    pub fn expense(description: &str, amount: f64, category: &str) -> Self {
        Self {
            description: description.to_string(),
            amount,
            category: category.to_string(),
            kind: "expense".to_string(),
        }
    }

    pub fn income(description: &str, amount: f64, category: &str) -> Self {
        Self {
            kind: "income".to_string(),
            ..Self::expense(description, amount, category)
        }
    }
}

/// Post as returned inside an envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBody {
    pub id: String,
    pub title: String,
    pub likes: Vec<String>,
    pub dislikes: Vec<String>,
    pub claps: u64,
    pub post_views: Vec<String>,
    pub author: Option<AuthorBody>,
    pub category: Option<CategoryRef>,
    pub scheduled_publish: Option<String>,
}

/// Embedded author
#[derive(Debug, Deserialize)]
pub struct AuthorBody {
    pub id: String,
    pub username: String,
}

/// Embedded category
#[derive(Debug, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

/// `{"status", "message", "post"}`
#[derive(Debug, Deserialize)]
pub struct PostEnvelope {
    pub status: String,
    pub message: String,
    pub post: PostBody,
}

/// `{"status", "message", "posts"}`
#[derive(Debug, Deserialize)]
pub struct PostListEnvelope {
    pub status: String,
    pub message: String,
    pub posts: Vec<PostBody>,
}

/// Category as returned by the category endpoints
#[derive(Debug, Deserialize)]
pub struct CategoryBody {
    pub id: String,
    pub name: String,
}

/// `{"status", "message", "category"}`
#[derive(Debug, Deserialize)]
pub struct CategoryEnvelope {
    pub status: String,
    pub message: String,
    pub category: CategoryBody,
}

/// Ledger entry
#[derive(Debug, Deserialize)]
pub struct TransactionBody {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}
