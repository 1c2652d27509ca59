//! Category use case
//!
//! Listing, creation, renaming and soft-deletion of product categories.

use std::sync::Arc;

use crate::domain::entities::{Category, CategoryId};
use crate::domain::ports::CategoryGateway;
use crate::error::DomainError;

/// Use case for managing categories
pub struct CategoryUseCase<CG>
where
    CG: CategoryGateway,
{
    categories: Arc<CG>,
}

impl<CG> CategoryUseCase<CG>
where
    CG: CategoryGateway,
{
    pub fn new(categories: Arc<CG>) -> Self {
        Self { categories }
    }

    /// List active categories, or every category when `include_inactive`
    pub async fn list_categories(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<Category>, DomainError> {
        if include_inactive {
            self.categories.list_all().await
        } else {
            self.categories.list_active().await
        }
    }

    /// Find a category by ID. A missing category is `None`, not an error.
    pub async fn get_category_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, DomainError> {
        self.categories.get_by_id(id).await
    }

    /// Create a new active category
    ///
    /// The name check and the insert are separate calls; the storage unique
    /// index settles concurrent creates with the same name.
    pub async fn create_category(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category, DomainError> {
        if self.categories.exists_by_name(name).await? {
            tracing::debug!(name, "Rejected duplicate category name");
            return Err(DomainError::DuplicateName(name.to_string()));
        }

        let category = Category::new(name, description.map(String::from))?;
        self.categories.create(&category).await?;

        tracing::info!(category_id = %category.id, name, "Category created");
        Ok(category)
    }

    /// Rename a category and replace its description
    pub async fn update_category(
        &self,
        id: &CategoryId,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category, DomainError> {
        let mut category = self.load(id).await?;

        category.set_name(name)?;
        category.description = description.map(String::from);
        category.touch();

        self.categories.update(&category).await?;

        tracing::info!(category_id = %category.id, "Category updated");
        Ok(category)
    }

    /// Soft-delete a category. Its products are left untouched.
    pub async fn deactivate_category(&self, id: &CategoryId) -> Result<(), DomainError> {
        let mut category = self.load(id).await?;

        category.deactivate();
        category.touch();
        self.categories.update(&category).await?;

        tracing::info!(category_id = %category.id, "Category deactivated");
        Ok(())
    }

    /// Bring a soft-deleted category back into default listings
    pub async fn reactivate_category(&self, id: &CategoryId) -> Result<(), DomainError> {
        let mut category = self.load(id).await?;

        category.reactivate();
        category.touch();
        self.categories.update(&category).await?;

        tracing::info!(category_id = %category.id, "Category reactivated");
        Ok(())
    }

    async fn load(&self, id: &CategoryId) -> Result<Category, DomainError> {
        self.categories
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Category {} not found", id)))
    }
}
