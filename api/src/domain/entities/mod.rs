//! Domain entities
//!
//! Catalog models with field-level invariants.
//! These are separate from the SeaORM table models in the `entity` module.

pub mod activation;
pub mod category;
pub mod product;

pub use activation::ActivationStatus;
pub use category::{Category, CategoryId};
pub use product::{NewProduct, Product, ProductChanges, ProductId};

use crate::error::DomainError;

/// Reject an empty value for a required text field.
///
/// Every assignment to a required field goes through here, so the invariant
/// holds for the whole lifetime of the entity and not only at construction.
pub(crate) fn require_filled(field: &str, value: impl Into<String>) -> Result<String, DomainError> {
    let value = value.into();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    Ok(value)
}
