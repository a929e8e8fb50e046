//! Product operations. Products are soft-deleted through `is_active`.

use retail_core::error::CoreError;
use retail_core::types::DbId;
use retail_db::models::product::{CreateProduct, Product, UpdateProduct};
use retail_db::repositories::ProductRepo;
use sqlx::PgPool;

use super::{begin, finish, WriteOp};

/// Insert a product.
///
/// Fails with `Conflict` when the SKU or code is taken (including by an
/// inactive product) or when `brand_id` references no brand.
pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, CoreError> {
    let op = WriteOp::new("create", "product").with_brand(Some(input.brand_id));
    let mut tx = begin(pool, &op).await?;
    let result = ProductRepo::create(&mut *tx, input).await;
    let product = finish(tx, result, &op).await?;

    tracing::info!(
        product_id = product.id,
        brand_id = product.brand_id,
        sku = ?product.sku,
        "Product created",
    );
    Ok(product)
}

/// Active products ordered by name.
pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    ProductRepo::list_active(pool).await
}

pub async fn get_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
    ProductRepo::find_active_by_id(pool, id).await
}

pub async fn get_by_sku(pool: &PgPool, sku: &str) -> Result<Option<Product>, sqlx::Error> {
    ProductRepo::find_active_by_sku(pool, sku).await
}

pub async fn get_by_code(pool: &PgPool, code: &str) -> Result<Option<Product>, sqlx::Error> {
    ProductRepo::find_active_by_code(pool, code).await
}

/// Apply a partial update to an active product.
///
/// Returns `None` when no active product has this id. Constraint failures
/// are translated the same way as in [`create`].
pub async fn update(
    pool: &PgPool,
    id: DbId,
    input: &UpdateProduct,
) -> Result<Option<Product>, CoreError> {
    let op = WriteOp::new("update", "product").with_brand(input.brand_id);
    let mut tx = begin(pool, &op).await?;
    let result = ProductRepo::update(&mut *tx, id, input).await;
    let product = finish(tx, result, &op).await?;

    if let Some(product) = &product {
        tracing::info!(product_id = product.id, "Product updated");
    }
    Ok(product)
}

/// Soft-delete an active product. Returns `false` when none matched.
pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, CoreError> {
    let op = WriteOp::new("delete", "product");
    let mut tx = begin(pool, &op).await?;
    let result = ProductRepo::soft_delete(&mut *tx, id).await;
    let deleted = finish(tx, result, &op).await?;

    if deleted {
        tracing::info!(product_id = id, "Product deactivated");
    }
    Ok(deleted)
}
