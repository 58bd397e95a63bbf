//! Egg database operations

use sqlx::PgPool;

use crate::models::egg::{Egg, EggInput};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Egg>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM eggs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Egg>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM eggs ORDER BY id").fetch_all(pool).await
}

pub async fn list_by_type(pool: &PgPool, type_egg_id: i64) -> Result<Vec<Egg>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM eggs WHERE type_egg_id = $1 ORDER BY id")
        .bind(type_egg_id)
        .fetch_all(pool)
        .await
}

/// Row count, not a quantity sum. See the egg service for the rationale.
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM eggs")
        .fetch_one(pool)
        .await
}

pub async fn insert(pool: &PgPool, data: &EggInput) -> Result<Egg, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO eggs (available_quantity, entry_date, expiration_date,
                           entry_price, sell_price, color, type_egg_id, supplier_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING *",
    )
    .bind(data.available_quantity)
    .bind(data.entry_date)
    .bind(data.expiration_date)
    .bind(data.entry_price)
    .bind(data.sell_price)
    .bind(data.color.trim())
    .bind(data.type_egg_id)
    .bind(data.supplier_id)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, id: i64, data: &EggInput) -> Result<Option<Egg>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE eggs SET
             available_quantity = $1, entry_date = $2, expiration_date = $3,
             entry_price = $4, sell_price = $5, color = $6,
             type_egg_id = $7, supplier_id = $8
         WHERE id = $9
         RETURNING *",
    )
    .bind(data.available_quantity)
    .bind(data.entry_date)
    .bind(data.expiration_date)
    .bind(data.entry_price)
    .bind(data.sell_price)
    .bind(data.color.trim())
    .bind(data.type_egg_id)
    .bind(data.supplier_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM eggs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
