pub mod brand;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /brands                     list, create
/// /brands/{id}                get, update, delete
///
/// /products                   list (active only), create
/// /products/sku/{sku}         get by SKU
/// /products/code/{code}       get by barcode
/// /products/{id}              get, partial update, soft delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/brands", brand::router())
        .nest("/products", product::router())
}
