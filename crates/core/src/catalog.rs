//! Field rules for catalog entities (brands and products).
//!
//! Lengths are counted in characters, not bytes. The same bounds are
//! mirrored as `CHECK` constraints in the schema.

use rust_decimal::Decimal;
use validator::ValidateLength;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length of a brand name.
pub const BRAND_NAME_MIN_LEN: u64 = 2;

/// Maximum length of a brand name.
pub const BRAND_NAME_MAX_LEN: u64 = 100;

/// Minimum length of a product name.
pub const PRODUCT_NAME_MIN_LEN: u64 = 1;

/// Maximum length of a product name.
pub const PRODUCT_NAME_MAX_LEN: u64 = 150;

/// Maximum length of a product SKU.
pub const SKU_MAX_LEN: u64 = 50;

/// Maximum length of a product barcode.
pub const CODE_MAX_LEN: u64 = 100;

/// Maximum length of a product image URL.
pub const IMAGE_URL_MAX_LEN: u64 = 255;

/// Prices are stored as `NUMERIC(10, 2)`, so the integer part holds at most
/// eight digits.
const PRICE_UPPER_BOUND: i64 = 100_000_000;

/// Decimal places kept by the `price` column.
const PRICE_MAX_SCALE: u32 = 2;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_len(
    field: &str,
    value: &str,
    min: Option<u64>,
    max: u64,
) -> Result<(), CoreError> {
    // PostgreSQL TEXT cannot store NUL.
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    if value.validate_length(min, Some(max), None) {
        return Ok(());
    }
    let msg = match min {
        Some(min) => format!("{field} must be between {min} and {max} characters"),
        None => format!("{field} must not exceed {max} characters"),
    };
    Err(CoreError::Validation(msg))
}

/// Validate a brand name (2 to 100 characters).
pub fn validate_brand_name(name: &str) -> Result<(), CoreError> {
    validate_len(
        "Brand name",
        name,
        Some(BRAND_NAME_MIN_LEN),
        BRAND_NAME_MAX_LEN,
    )
}

/// Validate a product name (1 to 150 characters).
pub fn validate_product_name(name: &str) -> Result<(), CoreError> {
    validate_len(
        "Product name",
        name,
        Some(PRODUCT_NAME_MIN_LEN),
        PRODUCT_NAME_MAX_LEN,
    )
}

/// Validate a SKU (at most 50 characters).
pub fn validate_sku(sku: &str) -> Result<(), CoreError> {
    validate_len("SKU", sku, None, SKU_MAX_LEN)
}

/// Validate a barcode (at most 100 characters).
pub fn validate_code(code: &str) -> Result<(), CoreError> {
    validate_len("Code", code, None, CODE_MAX_LEN)
}

/// Validate an image URL (at most 255 characters).
pub fn validate_image_url(url: &str) -> Result<(), CoreError> {
    validate_len("Image URL", url, None, IMAGE_URL_MAX_LEN)
}

/// Validate a product price.
///
/// Rules:
/// - Must not be negative.
/// - At most two decimal places, so the column never rounds.
/// - Must fit the `NUMERIC(10, 2)` column.
pub fn validate_price(price: Decimal) -> Result<(), CoreError> {
    if price < Decimal::ZERO {
        return Err(CoreError::Validation(
            "Price must not be negative".to_string(),
        ));
    }
    if price.normalize().scale() > PRICE_MAX_SCALE {
        return Err(CoreError::Validation(format!(
            "Price must have at most {PRICE_MAX_SCALE} decimal places"
        )));
    }
    if price >= Decimal::from(PRICE_UPPER_BOUND) {
        return Err(CoreError::Validation(format!(
            "Price must be less than {PRICE_UPPER_BOUND}"
        )));
    }
    Ok(())
}
