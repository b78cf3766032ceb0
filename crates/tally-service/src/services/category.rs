//! Category service
//!
//! Blog categories that posts are filed under.

use tally_common::Principal;
use tally_core::entities::Category;
use tally_core::CategoryId;
use tracing::{info, instrument};

use crate::dto::{CategoryResponse, CreateCategoryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a category owned by `principal`
    #[instrument(skip(self), fields(user_id = %principal.user_id))]
    pub async fn create_category(
        &self,
        principal: &Principal,
        req: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let name = req.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::validation("Category name is required"));
        }

        let category = Category::new(CategoryId::generate(), name, principal.user_id);
        self.ctx.category_repo().create(&category).await?;

        info!(category_id = %category.id, name = %category.name, "Category created");

        Ok(category.into())
    }

    /// All categories ordered by name
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().list().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }
}
