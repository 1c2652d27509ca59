//! Unified error types for the catalog API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors raised by entities and use cases
//! - `AppError`: HTTP boundary errors (wraps domain errors for responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::CategoryId;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// An entity field invariant was violated (empty name or SKU)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Product price must be greater than zero (got {0})")]
    InvalidPrice(Decimal),

    #[error("A category named '{0}' already exists")]
    DuplicateName(String),

    #[error("A product with SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("Category {0} not found")]
    CategoryNotFound(CategoryId),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(e @ DomainError::InvalidPrice(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid price", Some(e.to_string()))
            }
            AppError::Domain(e @ DomainError::DuplicateName(_))
            | AppError::Domain(e @ DomainError::DuplicateSku(_)) => {
                (StatusCode::CONFLICT, "Already exists", Some(e.to_string()))
            }
            AppError::Domain(e @ DomainError::CategoryNotFound(_)) => (
                StatusCode::NOT_FOUND,
                "Category not found",
                Some(e.to_string()),
            ),
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

impl AppError {
    /// Treat a missing referenced category as a bad request field rather than
    /// a missing resource. Used by the create endpoint, where the category id
    /// comes from the request body.
    pub fn category_as_bad_request(self) -> Self {
        match self {
            AppError::Domain(e @ DomainError::CategoryNotFound(_)) => {
                AppError::BadRequest(e.to_string())
            }
            other => other,
        }
    }
}
