//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Post and category
//! payloads are wrapped in a `{"status": "success", "message": ...}` envelope;
//! ledger payloads are returned bare.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use tally_core::{CategoryId, PostId, TransactionId, TransactionKind, UserId};

const SUCCESS: &str = "success";

// ============================================================================
// Post Responses
// ============================================================================

/// Author reference embedded in a post
#[derive(Debug, Clone, Serialize)]
pub struct AuthorSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Category reference embedded in a post
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
}

/// Post with reaction state and populated references
///
/// `author` / `category` are `null` when the referenced record is gone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub likes: BTreeSet<UserId>,
    pub dislikes: BTreeSet<UserId>,
    pub claps: u64,
    pub post_views: BTreeSet<UserId>,
    pub author: Option<AuthorSummary>,
    pub category: Option<CategorySummary>,
    pub scheduled_publish: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Single post envelope
#[derive(Debug, Serialize)]
pub struct PostEnvelope {
    pub status: &'static str,
    pub message: String,
    pub post: PostResponse,
}

impl PostEnvelope {
    pub fn success(message: impl Into<String>, post: PostResponse) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
            post,
        }
    }
}

/// Post list envelope
#[derive(Debug, Serialize)]
pub struct PostListEnvelope {
    pub status: &'static str,
    pub message: String,
    pub posts: Vec<PostResponse>,
}

impl PostListEnvelope {
    pub fn success(message: impl Into<String>, posts: Vec<PostResponse>) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
            posts,
        }
    }
}

/// Envelope carrying only a confirmation message
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub status: &'static str,
    pub message: String,
}

impl MessageEnvelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
        }
    }
}

// ============================================================================
// Category Responses
// ============================================================================

/// Blog category
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
}

/// Single category envelope
#[derive(Debug, Serialize)]
pub struct CategoryEnvelope {
    pub status: &'static str,
    pub message: String,
    pub category: CategoryResponse,
}

impl CategoryEnvelope {
    pub fn success(message: impl Into<String>, category: CategoryResponse) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
            category,
        }
    }
}

/// Category list envelope
#[derive(Debug, Serialize)]
pub struct CategoryListEnvelope {
    pub status: &'static str,
    pub message: String,
    pub categories: Vec<CategoryResponse>,
}

impl CategoryListEnvelope {
    pub fn success(message: impl Into<String>, categories: Vec<CategoryResponse>) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
            categories,
        }
    }
}

// ============================================================================
// Ledger Responses
// ============================================================================

/// Ledger transaction
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: TransactionId,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

/// The fixed category sets, keyed by transaction type
#[derive(Debug, Clone, Serialize)]
pub struct TransactionCategoriesResponse {
    pub expense: &'static [&'static str],
    pub income: &'static [&'static str],
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
