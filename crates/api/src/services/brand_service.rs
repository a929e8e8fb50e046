//! Brand operations. Brands are hard-deleted.

use retail_core::error::CoreError;
use retail_core::types::DbId;
use retail_db::models::brand::{Brand, CreateBrand, UpdateBrand};
use retail_db::repositories::BrandRepo;
use sqlx::PgPool;

use super::{begin, finish, WriteOp};

/// Insert a brand. Fails with `Conflict` when the name is taken.
pub async fn create(pool: &PgPool, input: &CreateBrand) -> Result<Brand, CoreError> {
    let op = WriteOp::new("create", "brand");
    let mut tx = begin(pool, &op).await?;
    let result = BrandRepo::create(&mut *tx, input).await;
    let brand = finish(tx, result, &op).await?;

    tracing::info!(brand_id = brand.id, name = %brand.name, "Brand created");
    Ok(brand)
}

/// All brands ordered by name.
pub async fn list(pool: &PgPool) -> Result<Vec<Brand>, sqlx::Error> {
    BrandRepo::list(pool).await
}

pub async fn get_by_id(pool: &PgPool, id: DbId) -> Result<Option<Brand>, sqlx::Error> {
    BrandRepo::find_by_id(pool, id).await
}

/// Apply an optional new name. Returns `None` when the brand does not exist.
pub async fn update(
    pool: &PgPool,
    id: DbId,
    input: &UpdateBrand,
) -> Result<Option<Brand>, CoreError> {
    let op = WriteOp::new("update", "brand");
    let mut tx = begin(pool, &op).await?;
    let result = BrandRepo::update(&mut *tx, id, input).await;
    let brand = finish(tx, result, &op).await?;

    if let Some(brand) = &brand {
        tracing::info!(brand_id = brand.id, name = %brand.name, "Brand updated");
    }
    Ok(brand)
}

/// Permanently remove a brand. Returns `false` when no row matched.
///
/// Products referencing the brand are not handled; the database rejects the
/// delete and the failure is reported as an internal error.
pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, CoreError> {
    let op = WriteOp::new("delete", "brand");
    let mut tx = begin(pool, &op).await?;
    let result = BrandRepo::delete(&mut *tx, id).await;
    let deleted = finish(tx, result, &op).await?;

    if deleted {
        tracing::info!(brand_id = id, "Brand deleted");
    }
    Ok(deleted)
}
