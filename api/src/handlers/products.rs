//! Product handlers
//!
//! Endpoints for browsing and administering products.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{CategoryId, NewProduct, ProductChanges, ProductId};
use crate::domain::ports::{CategoryGateway, ProductGateway};
use crate::error::AppError;
use crate::presenters::ProductDto;
use crate::AppState;

/// Query parameters for listing products
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default)]
    pub include_inactive: bool,
    pub category_id: Option<Uuid>,
}

/// Body for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    /// A decimal string ("19.90") keeps its scale. A JSON number is read as a
    /// float and comes back normalized ("19.9").
    pub price: Decimal,
    pub category_id: Uuid,
    pub image: Option<String>,
}

/// Body for replacing a product. The SKU cannot be changed.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Uuid,
    pub image: Option<String>,
}

/// GET /products
///
/// An unknown `category_id` is a 404, never an unfiltered listing.
pub async fn list_products<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductDto>>, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    let category_id = query.category_id.map(CategoryId);
    let products = state
        .product_use_case
        .list_products(query.include_inactive, category_id.as_ref())
        .await?;

    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// GET /products/:id
pub async fn get_product<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductDto>, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    let product = state
        .product_use_case
        .get_product_by_id(&ProductId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

    Ok(Json(product.into()))
}

/// POST /products
pub async fn create_product<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductDto>), AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    let product = state
        .product_use_case
        .create_product(NewProduct {
            name: request.name,
            sku: request.sku,
            description: request.description,
            price: request.price,
            category_id: CategoryId(request.category_id),
            image: request.image,
        })
        .await
        .map_err(|e| AppError::from(e).category_as_bad_request())?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /products/:id
pub async fn update_product<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<ProductDto>, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    let product = state
        .product_use_case
        .update_product(ProductChanges {
            id: ProductId(id),
            name: request.name,
            description: request.description,
            price: request.price,
            category_id: CategoryId(request.category_id),
            image: request.image,
        })
        .await
        .map_err(|e| AppError::from(e).category_as_bad_request())?;

    Ok(Json(product.into()))
}

/// DELETE /products/:id
pub async fn deactivate_product<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    state
        .product_use_case
        .deactivate_product(&ProductId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /products/:id/reactivate
pub async fn reactivate_product<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    state
        .product_use_case
        .reactivate_product(&ProductId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
