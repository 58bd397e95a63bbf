//! Order database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::order::{Order, OrderInput};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders ORDER BY id").fetch_all(pool).await
}

/// Orders with `order_date` in the half-open window `[start, end)`.
pub async fn list_in_window(
    pool: &PgPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders WHERE order_date >= $1 AND order_date < $2 ORDER BY id")
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
}

pub async fn insert(pool: &PgPool, data: &OrderInput) -> Result<Order, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO orders (total_price, state, user_id) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(data.total_price)
    .bind(data.state.trim())
    .bind(data.user_id)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, id: i64, data: &OrderInput) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE orders SET total_price = $1, state = $2, user_id = $3
         WHERE id = $4
         RETURNING *",
    )
    .bind(data.total_price)
    .bind(data.state.trim())
    .bind(data.user_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
