//! Handlers for the `/products` resource.
//!
//! Deleting a product only deactivates it; every read here sees active
//! products only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use retail_core::catalog;
use retail_core::error::CoreError;
use retail_core::types::DbId;
use retail_db::models::product::{CreateProduct, UpdateProduct};

use crate::error::{AppError, AppResult};
use crate::services::product_service;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

fn not_found_by(key: &'static str, value: String) -> AppError {
    AppError::Core(CoreError::NotFoundByKey {
        entity: "Product",
        key,
        value,
    })
}

/// Validate the optional string columns shared by create and update.
fn validate_optional_fields(
    sku: Option<&str>,
    code: Option<&str>,
    image_url: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(sku) = sku {
        catalog::validate_sku(sku)?;
    }
    if let Some(code) = code {
        catalog::validate_code(code)?;
    }
    if let Some(url) = image_url {
        catalog::validate_image_url(url)?;
    }
    Ok(())
}

fn validate_create_input(input: &CreateProduct) -> Result<(), CoreError> {
    catalog::validate_product_name(&input.name)?;
    catalog::validate_price(input.price)?;
    validate_optional_fields(
        input.sku.as_deref(),
        input.code.as_deref(),
        input.image_url.as_deref(),
    )
}

fn validate_update_input(input: &UpdateProduct) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        catalog::validate_product_name(name)?;
    }
    if let Some(price) = input.price {
        catalog::validate_price(price)?;
    }
    validate_optional_fields(
        input.sku.as_ref().and_then(|v| v.as_deref()),
        input.code.as_ref().and_then(|v| v.as_deref()),
        input.image_url.as_ref().and_then(|v| v.as_deref()),
    )
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_create_input(&input)?;

    let product = product_service::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = product_service::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /products/sku/{sku}
///
/// Keys containing NUL can never be stored, so they miss without a query.
pub async fn get_by_sku(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> AppResult<impl IntoResponse> {
    if sku.contains('\0') {
        return Err(not_found_by("sku", sku));
    }
    let product = product_service::get_by_sku(&state.pool, &sku)
        .await?
        .ok_or_else(|| not_found_by("sku", sku))?;
    Ok(Json(product))
}

/// GET /products/code/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    if code.contains('\0') {
        return Err(not_found_by("code", code));
    }
    let product = product_service::get_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| not_found_by("code", code))?;
    Ok(Json(product))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = product_service::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// PUT /products/{id}
///
/// Partial update: only the fields present in the body change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_update_input(&input)?;

    let product = product_service::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// DELETE /products/{id}
///
/// Marks the product inactive; the row is kept.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !product_service::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
