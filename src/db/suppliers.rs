//! Supplier database operations

use sqlx::PgPool;

use crate::models::supplier::{Supplier, SupplierInput};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Supplier>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM suppliers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Supplier>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM suppliers ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn address_taken(
    pool: &PgPool,
    address: &str,
    exclude_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM suppliers WHERE address = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
    )
    .bind(address)
    .bind(exclude_id)
    .fetch_one(pool)
    .await
}

pub async fn insert(pool: &PgPool, data: &SupplierInput) -> Result<Supplier, sqlx::Error> {
    sqlx::query_as("INSERT INTO suppliers (name, address) VALUES ($1, $2) RETURNING *")
        .bind(data.name.trim())
        .bind(data.address.trim())
        .fetch_one(pool)
        .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: &SupplierInput,
) -> Result<Option<Supplier>, sqlx::Error> {
    sqlx::query_as("UPDATE suppliers SET name = $1, address = $2 WHERE id = $3 RETURNING *")
        .bind(data.name.trim())
        .bind(data.address.trim())
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM suppliers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
