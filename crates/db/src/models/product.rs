//! Product entity model and DTOs.
//!
//! Products are never physically removed; `is_active = false` marks a
//! soft-deleted row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use retail_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub sku: Option<String>,
    pub code: Option<String>,
    pub price: Decimal,
    pub brand_id: DbId,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub sku: Option<String>,
    pub code: Option<String>,
    pub price: Decimal,
    pub brand_id: DbId,
    pub image_url: Option<String>,
}

/// DTO for partially updating a product.
///
/// Only supplied fields change. The nullable columns (`sku`, `code`,
/// `image_url`) use `Option<Option<_>>`: absent keeps the stored value,
/// `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sku: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub code: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub brand_id: Option<DbId>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub image_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}
