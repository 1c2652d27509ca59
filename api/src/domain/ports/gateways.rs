//! Gateway port traits
//!
//! These traits define the storage access the catalog use cases depend on.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Gateways carry no business rules. Uniqueness across concurrent writers is
//! the implementation's job (a unique index), since the use cases only do a
//! read-then-write existence check.

use async_trait::async_trait;

use crate::domain::entities::{Category, CategoryId, Product, ProductId};
use crate::error::DomainError;

/// Gateway for Category entities
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Insert a new category
    async fn create(&self, category: &Category) -> Result<(), DomainError>;

    /// Persist the current state of an existing category
    async fn update(&self, category: &Category) -> Result<(), DomainError>;

    /// Find a category by ID, active or not
    async fn get_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError>;

    /// List active categories
    async fn list_active(&self) -> Result<Vec<Category>, DomainError>;

    /// List every category, including inactive ones
    async fn list_all(&self) -> Result<Vec<Category>, DomainError>;

    /// Check whether a category with this exact name exists
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;
}

/// Gateway for Product entities
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Insert a new product
    async fn create(&self, product: &Product) -> Result<(), DomainError>;

    /// Persist the current state of an existing product
    async fn update(&self, product: &Product) -> Result<(), DomainError>;

    /// Find a product by ID, active or not
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// List every product
    async fn list_all(&self) -> Result<Vec<Product>, DomainError>;

    /// List active products
    async fn list_active(&self) -> Result<Vec<Product>, DomainError>;

    /// List every product in a category
    async fn list_by_category(&self, category_id: &CategoryId)
        -> Result<Vec<Product>, DomainError>;

    /// List active products in a category
    async fn list_active_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Product>, DomainError>;

    /// Check whether a product with this SKU exists
    async fn exists_by_sku(&self, sku: &str) -> Result<bool, DomainError>;
}
