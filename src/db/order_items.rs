//! Order-line-item database operations

use sqlx::PgPool;

use crate::models::order_item::{OrderItem, OrderItemInput};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<OrderItem>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM order_items WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<OrderItem>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM order_items ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn insert(pool: &PgPool, data: &OrderItemInput) -> Result<OrderItem, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO order_items (quantity, unit_price, sub_total, egg_id, order_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(data.quantity)
    .bind(data.unit_price)
    .bind(data.sub_total)
    .bind(data.egg_id)
    .bind(data.order_id)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: &OrderItemInput,
) -> Result<Option<OrderItem>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE order_items SET
             quantity = $1, unit_price = $2, sub_total = $3, egg_id = $4, order_id = $5
         WHERE id = $6
         RETURNING *",
    )
    .bind(data.quantity)
    .bind(data.unit_price)
    .bind(data.sub_total)
    .bind(data.egg_id)
    .bind(data.order_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM order_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
