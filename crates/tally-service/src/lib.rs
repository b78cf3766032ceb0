//! # tally-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthorSummary, CategoryEnvelope, CategoryListEnvelope, CategoryResponse, CategorySummary,
    CreateCategoryRequest, CreatePostRequest, CreateTransactionRequest, HealthChecks,
    HealthResponse, MessageEnvelope, PostEnvelope, PostListEnvelope, PostResponse,
    ReadinessResponse, SchedulePostRequest, TransactionCategoriesResponse, TransactionQuery,
    TransactionResponse, UpdatePostRequest, UpdateTransactionRequest,
};
pub use services::{
    CategoryService, PostService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, TransactionService,
};
