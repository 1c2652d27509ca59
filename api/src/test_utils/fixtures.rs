//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use rust_decimal_macros::dec;

use crate::domain::entities::{Category, CategoryId, NewProduct, Product};

/// Create an active test category
pub fn test_category() -> Category {
    test_category_named("Lanches")
}

/// Create an active test category with a specific name
pub fn test_category_named(name: &str) -> Category {
    Category::new(name, Some(format!("Categoria {}", name))).unwrap()
}

/// Create an inactive test category
pub fn inactive_category(name: &str) -> Category {
    let mut category = test_category_named(name);
    category.deactivate();
    category
}

/// Creation input for a product in the given category
pub fn new_product(category_id: CategoryId) -> NewProduct {
    new_product_with_sku(category_id, "SKU1")
}

/// Creation input with a specific SKU
pub fn new_product_with_sku(category_id: CategoryId, sku: &str) -> NewProduct {
    NewProduct {
        name: "X-Burger".to_string(),
        sku: sku.to_string(),
        description: Some("Pão, hambúrguer e queijo".to_string()),
        price: dec!(19.90),
        category_id,
        image: None,
    }
}

/// Create an active test product in the given category
pub fn test_product(category_id: CategoryId) -> Product {
    test_product_with_sku(category_id, "SKU1")
}

/// Create an active test product with a specific SKU
pub fn test_product_with_sku(category_id: CategoryId, sku: &str) -> Product {
    Product::new(new_product_with_sku(category_id, sku)).unwrap()
}

/// Create an inactive test product
pub fn inactive_product(category_id: CategoryId, sku: &str) -> Product {
    let mut product = test_product_with_sku(category_id, sku);
    product.deactivate();
    product
}
