//! Handlers for the `/brands` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use retail_core::catalog;
use retail_core::error::CoreError;
use retail_core::types::DbId;
use retail_db::models::brand::{CreateBrand, UpdateBrand};

use crate::error::{AppError, AppResult};
use crate::services::brand_service;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Brand", id })
}

/// POST /brands
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBrand>,
) -> AppResult<impl IntoResponse> {
    catalog::validate_brand_name(&input.name)?;

    let brand = brand_service::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

/// GET /brands
///
/// All brands, alphabetically.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brands = brand_service::list(&state.pool).await?;
    Ok(Json(brands))
}

/// GET /brands/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let brand = brand_service::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(brand))
}

/// PUT /brands/{id}
///
/// Rename a brand. An omitted name leaves the brand unchanged.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBrand>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        catalog::validate_brand_name(name)?;
    }

    let brand = brand_service::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(brand))
}

/// DELETE /brands/{id}
///
/// Permanently remove a brand.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !brand_service::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
