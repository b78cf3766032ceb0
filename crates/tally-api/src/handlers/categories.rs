//! Category handlers

use axum::{extract::State, Json};
use tally_service::{
    CategoryEnvelope, CategoryListEnvelope, CategoryService, CreateCategoryRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create category
///
/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryEnvelope>>> {
    let service = CategoryService::new(state.service_context());
    let category = service.create_category(auth.principal(), request).await?;
    Ok(Created(Json(CategoryEnvelope::success(
        "Category created successfully",
        category,
    ))))
}

/// List categories
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<CategoryListEnvelope>> {
    let service = CategoryService::new(state.service_context());
    let categories = service.list_categories().await?;
    Ok(Json(CategoryListEnvelope::success(
        "Categories fetched successfully",
        categories,
    )))
}
