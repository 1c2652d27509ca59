//! PostgreSQL adapters
//!
//! Implementations of the gateway traits using SeaORM and PostgreSQL.

pub mod category_gateway;
pub mod product_gateway;

#[cfg(test)]
mod integration_tests;

pub use category_gateway::PostgresCategoryGateway;
pub use product_gateway::PostgresProductGateway;

use sea_orm::{DbErr, SqlErr};

use crate::domain::entities::{Category, Product};
use crate::error::DomainError;

/// Entity being written when an insert or update fails
pub(crate) enum WriteTarget<'a> {
    Category(&'a Category),
    Product(&'a Product),
}

/// Translate a failed write into a domain error
///
/// Unique index violations surface as the matching duplicate error, so two
/// concurrent creates that both passed the existence check still end with
/// exactly one row.
pub(crate) fn map_write_error(err: DbErr, target: WriteTarget<'_>) -> DomainError {
    match (err.sql_err(), target) {
        (Some(SqlErr::UniqueConstraintViolation(_)), WriteTarget::Category(category)) => {
            DomainError::DuplicateName(category.name().to_string())
        }
        (Some(SqlErr::UniqueConstraintViolation(_)), WriteTarget::Product(product)) => {
            DomainError::DuplicateSku(product.sku().to_string())
        }
        (Some(SqlErr::ForeignKeyConstraintViolation(_)), WriteTarget::Product(product)) => {
            DomainError::CategoryNotFound(product.category_id)
        }
        (_, WriteTarget::Category(category)) if matches!(err, DbErr::RecordNotUpdated) => {
            DomainError::NotFound(format!("Category {} not found", category.id))
        }
        (_, WriteTarget::Product(product)) if matches!(err, DbErr::RecordNotUpdated) => {
            DomainError::NotFound(format!("Product {} not found", product.id))
        }
        _ => DomainError::Database(err.to_string()),
    }
}
