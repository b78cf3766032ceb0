//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs and envelopes for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCategoryRequest, CreatePostRequest, CreateTransactionRequest, SchedulePostRequest,
    TransactionQuery, UpdatePostRequest, UpdateTransactionRequest,
};

pub use responses::{
    AuthorSummary, CategoryEnvelope, CategoryListEnvelope, CategoryResponse, CategorySummary,
    HealthChecks, HealthResponse, MessageEnvelope, PostEnvelope, PostListEnvelope, PostResponse,
    ReadinessResponse, TransactionCategoriesResponse, TransactionResponse,
};
