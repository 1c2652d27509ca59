//! Category handlers
//!
//! Endpoints for browsing and administering categories.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::CategoryId;
use crate::domain::ports::{CategoryGateway, ProductGateway};
use crate::error::AppError;
use crate::presenters::CategoryDto;
use crate::AppState;

/// Query parameters for listing categories
#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

/// Body for creating or replacing a category
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

/// GET /categories
pub async fn list_categories<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<Vec<CategoryDto>>, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    let categories = state
        .category_use_case
        .list_categories(query.include_inactive)
        .await?;

    Ok(Json(categories.into_iter().map(CategoryDto::from).collect()))
}

/// GET /categories/:id
pub async fn get_category<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryDto>, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    let category = state
        .category_use_case
        .get_category_by_id(&CategoryId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    Ok(Json(category.into()))
}

/// POST /categories
pub async fn create_category<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Json(request): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryDto>), AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    let category = state
        .category_use_case
        .create_category(&request.name, request.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// PUT /categories/:id
pub async fn update_category<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Path(id): Path<Uuid>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<CategoryDto>, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    let category = state
        .category_use_case
        .update_category(
            &CategoryId(id),
            &request.name,
            request.description.as_deref(),
        )
        .await?;

    Ok(Json(category.into()))
}

/// DELETE /categories/:id
///
/// Soft delete: the category is kept but hidden from default listings.
pub async fn deactivate_category<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    state
        .category_use_case
        .deactivate_category(&CategoryId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /categories/:id/reactivate
pub async fn reactivate_category<CG, PG>(
    State(state): State<AppState<CG, PG>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError>
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    state
        .category_use_case
        .reactivate_category(&CategoryId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
