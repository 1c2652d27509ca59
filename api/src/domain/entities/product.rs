//! Product domain entity
//!
//! A sellable catalog item. Unique by SKU and always attached to one category.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{require_filled, ActivationStatus, CategoryId};
use crate::error::DomainError;

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product
///
/// `name` and `sku` are private so every assignment is validated. `price` is
/// not checked here; the use cases require it to be positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    name: String,
    sku: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
    status: ActivationStatus,
    /// Opaque reference handed out by the file storage collaborator
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create a new product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
    pub image: Option<String>,
}

/// Replacement values applied by a product update
///
/// There is no SKU here: updates never change a product's SKU.
#[derive(Debug, Clone)]
pub struct ProductChanges {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
    pub image: Option<String>,
}

impl Product {
    /// Create a new active product with a fresh identifier
    pub fn new(fields: NewProduct) -> Result<Self, DomainError> {
        let now = Utc::now();
        Self::restore(ProductId::new(), fields, true, now, now)
    }

    /// Rebuild a product from stored state, re-checking the name and SKU
    pub fn restore(
        id: ProductId,
        fields: NewProduct,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: require_filled("name", fields.name)?,
            sku: require_filled("sku", fields.sku)?,
            description: fields.description,
            price: fields.price,
            category_id: fields.category_id,
            status: ActivationStatus::from_active(active),
            image: fields.image,
            created_at,
            updated_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name = require_filled("name", name)?;
        Ok(())
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    #[allow(dead_code)]
    pub fn set_sku(&mut self, sku: impl Into<String>) -> Result<(), DomainError> {
        self.sku = require_filled("sku", sku)?;
        Ok(())
    }

    #[allow(dead_code)]
    pub fn status(&self) -> ActivationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn deactivate(&mut self) {
        self.status = self.status.deactivate();
    }

    pub fn reactivate(&mut self) {
        self.status = self.status.reactivate();
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
