//! Integration tests for the brand repository.
//!
//! Exercises `BrandRepo` against a real database:
//! - Create, update, list ordering
//! - Unique constraint on name
//! - Hard delete and the foreign-key guard from products

use rust_decimal::Decimal;
use sqlx::PgPool;
use retail_db::models::brand::{CreateBrand, UpdateBrand};
use retail_db::models::product::CreateProduct;
use retail_db::repositories::{BrandRepo, ProductRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_brand(name: &str) -> CreateBrand {
    CreateBrand {
        name: name.to_string(),
    }
}

fn db_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find_brand(pool: PgPool) {
    let brand = BrandRepo::create(&pool, &new_brand("Coca-Cola")).await.unwrap();
    assert!(brand.id > 0);

    let found = BrandRepo::find_by_id(&pool, brand.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Coca-Cola");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_brand_name_is_unique_violation(pool: PgPool) {
    BrandRepo::create(&pool, &new_brand("Coca-Cola")).await.unwrap();
    let err = BrandRepo::create(&pool, &new_brand("Coca-Cola"))
        .await
        .unwrap_err();

    assert_eq!(db_code(&err).as_deref(), Some("23505"));
    match err {
        sqlx::Error::Database(db_err) => assert_eq!(db_err.constraint(), Some("uq_brands_name")),
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_brands_ordered_by_name(pool: PgPool) {
    BrandRepo::create(&pool, &new_brand("Pepsi")).await.unwrap();
    BrandRepo::create(&pool, &new_brand("Coca-Cola")).await.unwrap();

    let names: Vec<String> = BrandRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["Coca-Cola", "Pepsi"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_brand_without_name_keeps_value(pool: PgPool) {
    let brand = BrandRepo::create(&pool, &new_brand("Nestle")).await.unwrap();

    let unchanged = BrandRepo::update(&pool, brand.id, &UpdateBrand::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.name, "Nestle");

    let renamed = BrandRepo::update(
        &pool,
        brand.id,
        &UpdateBrand {
            name: Some("Nestlé".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.name, "Nestlé");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_brand_returns_none(pool: PgPool) {
    let result = BrandRepo::update(
        &pool,
        999_999,
        &UpdateBrand {
            name: Some("Ghost".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_brand_is_permanent(pool: PgPool) {
    let brand = BrandRepo::create(&pool, &new_brand("Fanta")).await.unwrap();

    assert!(BrandRepo::delete(&pool, brand.id).await.unwrap());
    assert!(BrandRepo::find_by_id(&pool, brand.id).await.unwrap().is_none());

    // Second delete matches nothing.
    assert!(!BrandRepo::delete(&pool, brand.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_referenced_brand_is_fk_violation(pool: PgPool) {
    let brand = BrandRepo::create(&pool, &new_brand("Sprite")).await.unwrap();
    ProductRepo::create(
        &pool,
        &CreateProduct {
            name: "Sprite 500ml".to_string(),
            sku: None,
            code: None,
            price: Decimal::from(890),
            brand_id: brand.id,
            image_url: None,
        },
    )
    .await
    .unwrap();

    let err = BrandRepo::delete(&pool, brand.id).await.unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some("23503"));
}
