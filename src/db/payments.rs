//! Payment database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::payment::{Payment, PaymentInput};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM payments WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM payments ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn insert(pool: &PgPool, data: &PaymentInput) -> Result<Payment, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO payments (amount_paid, payment_method, user_id, bill_id)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(data.amount_paid)
    .bind(data.payment_method.trim())
    .bind(data.user_id)
    .bind(data.bill_id)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: &PaymentInput,
) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE payments SET amount_paid = $1, payment_method = $2, user_id = $3, bill_id = $4
         WHERE id = $5
         RETURNING *",
    )
    .bind(data.amount_paid)
    .bind(data.payment_method.trim())
    .bind(data.user_id)
    .bind(data.bill_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM payments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

/// SUM(amount_paid) over all payments; 0.0 when there are none.
pub async fn total_earnings(pool: &PgPool) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar("SELECT COALESCE(SUM(amount_paid), 0.0) FROM payments")
        .fetch_one(pool)
        .await
}

/// SUM(amount_paid) over payments issued in `[start, end)`.
pub async fn total_earnings_in_window(
    pool: &PgPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COALESCE(SUM(amount_paid), 0.0) FROM payments
         WHERE issue_date >= $1 AND issue_date < $2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
}
