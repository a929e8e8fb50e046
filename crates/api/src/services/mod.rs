//! Service layer: one function per catalog operation.
//!
//! Services receive the pool explicitly. Every write runs in its own
//! transaction and is finished through [`finish`], which commits on success
//! and rolls back on failure before translating the database error into a
//! [`CoreError`]. Reads return raw sqlx errors.

pub mod brand_service;
pub mod product_service;

use retail_core::error::CoreError;
use retail_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Describes the write in flight, for error wording and logs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WriteOp {
    /// Verb used in the generic failure message ("create", "update", ...).
    pub action: &'static str,
    /// Lower-case entity name ("brand", "product").
    pub entity: &'static str,
    /// Brand referenced by the write, reported on foreign-key failures.
    pub brand_id: Option<DbId>,
}

impl WriteOp {
    pub(crate) const fn new(action: &'static str, entity: &'static str) -> Self {
        Self {
            action,
            entity,
            brand_id: None,
        }
    }

    pub(crate) const fn with_brand(mut self, brand_id: Option<DbId>) -> Self {
        self.brand_id = brand_id;
        self
    }

    fn failure(&self) -> CoreError {
        CoreError::Internal(format!("Could not {} {}", self.action, self.entity))
    }
}

/// Human-readable conflict message for a known unique constraint.
fn unique_conflict_message(constraint: &str) -> String {
    match constraint {
        "uq_brands_name" => "Brand with this name already exists".to_string(),
        "uq_products_sku" => "Product with this SKU already exists".to_string(),
        "uq_products_code" => "Product with this code already exists".to_string(),
        other => format!("Duplicate value violates unique constraint: {other}"),
    }
}

/// Translate a failed write into a domain error.
///
/// - Unique violations become [`CoreError::Conflict`].
/// - Foreign-key violations become [`CoreError::Conflict`] naming the brand,
///   when the write carried one.
/// - Everything else becomes [`CoreError::Internal`].
pub(crate) fn translate_write_error(err: sqlx::Error, op: &WriteOp) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                tracing::warn!(
                    action = op.action,
                    entity = op.entity,
                    constraint,
                    "Write rejected by unique constraint",
                );
                return CoreError::Conflict(unique_conflict_message(constraint));
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                if let Some(brand_id) = op.brand_id {
                    tracing::warn!(
                        action = op.action,
                        entity = op.entity,
                        brand_id,
                        "Write references a missing brand",
                    );
                    return CoreError::Conflict(format!("Brand with id {brand_id} does not exist"));
                }
            }
            _ => {}
        }
    }

    tracing::error!(
        action = op.action,
        entity = op.entity,
        error = %err,
        "Unexpected error during write",
    );
    op.failure()
}

/// Open a transaction for `op`.
pub(crate) async fn begin(
    pool: &PgPool,
    op: &WriteOp,
) -> Result<Transaction<'static, Postgres>, CoreError> {
    pool.begin()
        .await
        .map_err(|err| translate_write_error(err, op))
}

/// Commit `tx` if `result` succeeded, otherwise roll it back, then translate
/// any database error.
pub(crate) async fn finish<T>(
    tx: Transaction<'static, Postgres>,
    result: Result<T, sqlx::Error>,
    op: &WriteOp,
) -> Result<T, CoreError> {
    match result {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|err| translate_write_error(err, op))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(
                    action = op.action,
                    entity = op.entity,
                    error = %rollback_err,
                    "Rollback failed",
                );
            }
            Err(translate_write_error(err, op))
        }
    }
}
