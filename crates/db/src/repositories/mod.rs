//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Read methods accept `&PgPool`; write methods accept any `PgExecutor` so
//! callers can run them inside a transaction (`&mut *tx`) or directly on
//! the pool.

pub mod brand_repo;
pub mod product_repo;

pub use brand_repo::BrandRepo;
pub use product_repo::ProductRepo;
