use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), 2, "expected brands and products, got {rows:?}");
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// No character varying columns should exist; text columns use TEXT with CHECK constraints.
#[sqlx::test(migrations = "./migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(rows.is_empty(), "Found VARCHAR columns: {rows:?}");
}

/// Length checks reject rows written around the API.
#[sqlx::test(migrations = "./migrations")]
async fn test_brand_name_length_is_checked(pool: PgPool) {
    let result = sqlx::query("INSERT INTO brands (name) VALUES ('X')")
        .execute(&pool)
        .await;
    assert!(result.is_err());
}

/// `updated_at` is bumped by trigger on every product update.
#[sqlx::test(migrations = "./migrations")]
async fn test_products_updated_at_trigger(pool: PgPool) {
    retail_db::health_check(&pool).await.unwrap();

    let (brand_id,): (i64,) =
        sqlx::query_as("INSERT INTO brands (name) VALUES ('Trigger') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO products (name, price, brand_id, created_at, updated_at) \
         VALUES ('P', 1, $1, now() - interval '1 day', now() - interval '1 day') \
         RETURNING id",
    )
    .bind(brand_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    let (bumped,): (bool,) = sqlx::query_as(
        "UPDATE products SET price = 2 WHERE id = $1 RETURNING updated_at > created_at",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(bumped);
}
