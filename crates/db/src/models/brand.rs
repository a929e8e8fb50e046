//! Brand entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use retail_core::types::DbId;

/// A row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new brand.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBrand {
    pub name: String,
}

/// DTO for updating a brand. An absent name leaves the row unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBrand {
    pub name: Option<String>,
}
