//! SeaORM table models
//!
//! Hand-maintained to match `migrations/0001_create_catalog.sql`.

pub mod categories;
pub mod products;
