//! Response shapes for catalog entities
//!
//! Straight field copies; no decisions are made here.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{Category, Product};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name().to_string(),
            active: category.is_active(),
            description: category.description,
            created_at: category.created_at.to_rfc3339(),
            updated_at: category.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    /// Serialized as a string ("19.90") so no precision is lost in JSON
    pub price: Decimal,
    pub category_id: String,
    pub active: bool,
    pub image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name().to_string(),
            sku: product.sku().to_string(),
            active: product.is_active(),
            description: product.description,
            price: product.price,
            category_id: product.category_id.to_string(),
            image: product.image,
            created_at: product.created_at.to_rfc3339(),
            updated_at: product.updated_at.to_rfc3339(),
        }
    }
}
