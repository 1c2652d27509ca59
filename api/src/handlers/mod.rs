//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod categories;
pub mod products;

pub use categories::{
    create_category, deactivate_category, get_category, list_categories, reactivate_category,
    update_category,
};
pub use products::{
    create_product, deactivate_product, get_product, list_products, reactivate_product,
    update_product,
};
