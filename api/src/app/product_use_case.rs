//! Product use case
//!
//! Handles product listing, creation, updates and soft-deletion, and keeps
//! products consistent with their category.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::entities::{CategoryId, NewProduct, Product, ProductChanges, ProductId};
use crate::domain::ports::{CategoryGateway, ProductGateway};
use crate::error::DomainError;

/// Use case for managing products
pub struct ProductUseCase<PG, CG>
where
    PG: ProductGateway,
    CG: CategoryGateway,
{
    products: Arc<PG>,
    categories: Arc<CG>,
}

impl<PG, CG> ProductUseCase<PG, CG>
where
    PG: ProductGateway,
    CG: CategoryGateway,
{
    pub fn new(products: Arc<PG>, categories: Arc<CG>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// List products, optionally restricted to one category
    ///
    /// A category filter that does not resolve is an error; it never falls
    /// back to an unfiltered listing.
    pub async fn list_products(
        &self,
        include_inactive: bool,
        category_id: Option<&CategoryId>,
    ) -> Result<Vec<Product>, DomainError> {
        match category_id {
            Some(category_id) => {
                self.require_category(category_id).await?;

                if include_inactive {
                    self.products.list_by_category(category_id).await
                } else {
                    self.products.list_active_by_category(category_id).await
                }
            }
            None if include_inactive => self.products.list_all().await,
            None => self.products.list_active().await,
        }
    }

    /// Find a product by ID. A missing product is `None`, not an error.
    pub async fn get_product_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        self.products.get_by_id(id).await
    }

    /// Create a new active product
    ///
    /// Checks run in a fixed order and each one short-circuits the next:
    /// 1. price is positive once rounded to cents
    /// 2. SKU is not taken
    /// 3. category exists
    ///
    /// Nothing is written unless all three pass.
    pub async fn create_product(&self, input: NewProduct) -> Result<Product, DomainError> {
        require_positive_price(input.price)?;

        if self.products.exists_by_sku(&input.sku).await? {
            tracing::debug!(sku = %input.sku, "Rejected duplicate SKU");
            return Err(DomainError::DuplicateSku(input.sku));
        }

        self.require_category(&input.category_id).await?;

        let product = Product::new(input)?;
        self.products.create(&product).await?;

        tracing::info!(
            product_id = %product.id,
            sku = product.sku(),
            category_id = %product.category_id,
            "Product created"
        );
        Ok(product)
    }

    /// Replace a product's editable fields
    ///
    /// Unlike creation, this does not re-check SKU uniqueness (the SKU is not
    /// editable) nor that the new category exists.
    pub async fn update_product(&self, changes: ProductChanges) -> Result<Product, DomainError> {
        let mut product = self.load(&changes.id).await?;

        require_positive_price(changes.price)?;

        product.set_name(changes.name)?;
        product.description = changes.description;
        product.price = changes.price;
        product.category_id = changes.category_id;
        product.image = changes.image;
        product.touch();

        self.products.update(&product).await?;

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Soft-delete a product
    pub async fn deactivate_product(&self, id: &ProductId) -> Result<(), DomainError> {
        let mut product = self.load(id).await?;

        product.deactivate();
        product.touch();
        self.products.update(&product).await?;

        tracing::info!(product_id = %product.id, "Product deactivated");
        Ok(())
    }

    /// Bring a soft-deleted product back into default listings
    pub async fn reactivate_product(&self, id: &ProductId) -> Result<(), DomainError> {
        let mut product = self.load(id).await?;

        product.reactivate();
        product.touch();
        self.products.update(&product).await?;

        tracing::info!(product_id = %product.id, "Product reactivated");
        Ok(())
    }

    async fn load(&self, id: &ProductId) -> Result<Product, DomainError> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Product {} not found", id)))
    }

    async fn require_category(&self, id: &CategoryId) -> Result<(), DomainError> {
        match self.categories.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => {
                tracing::debug!(category_id = %id, "Referenced category does not exist");
                Err(DomainError::CategoryNotFound(*id))
            }
        }
    }
}

/// Prices are stored as `numeric(18, 2)`, which rounds halves away from zero,
/// so the check runs on the stored value.
fn require_positive_price(price: Decimal) -> Result<(), DomainError> {
    let stored = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if stored <= Decimal::ZERO {
        return Err(DomainError::InvalidPrice(price));
    }
    Ok(())
}
