//! Repository for the `products` table.
//!
//! Every lookup except [`ProductRepo::find_by_id`] filters on
//! `is_active = true`.

use sqlx::{PgExecutor, PgPool};
use retail_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, sku, code, price, brand_id, image_url, is_active, created_at, updated_at";

/// Provides CRUD and soft-delete operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateProduct) -> Result<Product, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO products (name, sku, code, price, brand_id, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(&input.code)
            .bind(input.price)
            .bind(input.brand_id)
            .bind(&input.image_url)
            .fetch_one(executor)
            .await
    }

    /// Find a product by ID regardless of `is_active`.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active product by ID.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active product by SKU.
    pub async fn find_active_by_sku(
        pool: &PgPool,
        sku: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM products WHERE sku = $1 AND is_active = true");
        sqlx::query_as::<_, Product>(&query)
            .bind(sku)
            .fetch_optional(pool)
            .await
    }

    /// Find an active product by barcode.
    pub async fn find_active_by_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM products WHERE code = $1 AND is_active = true");
        sqlx::query_as::<_, Product>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List active products ordered by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE is_active = true ORDER BY name ASC, id ASC"
        );
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Partially update an active product. Only supplied fields are applied.
    ///
    /// `sku`, `code` and `image_url` use `Option<Option<String>>`: the outer
    /// `Some` selects the column for update and the inner value (possibly
    /// `None`) is written as-is.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE products SET \
                name      = COALESCE($2, name), \
                sku       = CASE WHEN $3 THEN $4 ELSE sku END, \
                code      = CASE WHEN $5 THEN $6 ELSE code END, \
                price     = COALESCE($7, price), \
                brand_id  = COALESCE($8, brand_id), \
                image_url = CASE WHEN $9 THEN $10 ELSE image_url END, \
                is_active = COALESCE($11, is_active) \
             WHERE id = $1 AND is_active = true \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.sku.is_some())
            .bind(input.sku.as_ref().and_then(|v| v.as_deref()))
            .bind(input.code.is_some())
            .bind(input.code.as_ref().and_then(|v| v.as_deref()))
            .bind(input.price)
            .bind(input.brand_id)
            .bind(input.image_url.is_some())
            .bind(input.image_url.as_ref().and_then(|v| v.as_deref()))
            .bind(input.is_active)
            .fetch_optional(executor)
            .await
    }

    /// Soft-delete a product (set `is_active = false`).
    ///
    /// Returns `true` if an active row was deactivated.
    pub async fn soft_delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result =
            sqlx::query("UPDATE products SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(executor)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
