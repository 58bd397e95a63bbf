//! Bill database operations, including the role-filtered aggregates
//! joining bills → orders → users → roles.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::bill::{Bill, BillInput};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Bill>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM bills WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Bill>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM bills ORDER BY id").fetch_all(pool).await
}

pub async fn insert(pool: &PgPool, data: &BillInput) -> Result<Bill, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO bills (total_price, paid, order_id) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(data.total_price)
    .bind(data.paid)
    .bind(data.order_id)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, id: i64, data: &BillInput) -> Result<Option<Bill>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE bills SET total_price = $1, paid = $2, order_id = $3
         WHERE id = $4
         RETURNING *",
    )
    .bind(data.total_price)
    .bind(data.paid)
    .bind(data.order_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM bills WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

/// Bills issued in `[start, end]` whose order's user holds `role`.
pub async fn list_for_role_in_range(
    pool: &PgPool,
    role: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Bill>, sqlx::Error> {
    sqlx::query_as(
        "SELECT DISTINCT b.* FROM bills b
         JOIN orders o ON o.id = b.order_id
         JOIN user_roles ur ON ur.user_id = o.user_id
         JOIN roles r ON r.id = ur.role_id
         WHERE r.name = $1 AND b.issue_date >= $2 AND b.issue_date <= $3
         ORDER BY b.id",
    )
    .bind(role)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

/// All bills whose order's user holds any of the given roles.
pub async fn list_for_roles(pool: &PgPool, roles: &[&str]) -> Result<Vec<Bill>, sqlx::Error> {
    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    sqlx::query_as(
        "SELECT DISTINCT b.* FROM bills b
         JOIN orders o ON o.id = b.order_id
         JOIN user_roles ur ON ur.user_id = o.user_id
         JOIN roles r ON r.id = ur.role_id
         WHERE r.name = ANY($1)
         ORDER BY b.id",
    )
    .bind(&roles)
    .fetch_all(pool)
    .await
}

/// Name of the `role` user with the most bills in `[start, end]`.
/// Ties break by whatever order the store returns first.
pub async fn best_customer_in_range(
    pool: &PgPool,
    role: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT u.name FROM users u
         JOIN user_roles ur ON ur.user_id = u.id
         JOIN roles r ON r.id = ur.role_id
         JOIN orders o ON o.user_id = u.id
         JOIN bills b ON b.order_id = o.id
         WHERE r.name = $1 AND b.issue_date >= $2 AND b.issue_date <= $3
         GROUP BY u.id
         ORDER BY COUNT(b.id) DESC
         LIMIT 1",
    )
    .bind(role)
    .bind(start)
    .bind(end)
    .fetch_optional(pool)
    .await
}

/// SUM(total_price) over `role` bills issued in `[start, end]`; 0.0 when none.
pub async fn sales_total_in_range(
    pool: &PgPool,
    role: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COALESCE(SUM(b.total_price), 0.0) FROM bills b
         JOIN orders o ON o.id = b.order_id
         JOIN user_roles ur ON ur.user_id = o.user_id
         JOIN roles r ON r.id = ur.role_id
         WHERE r.name = $1 AND b.issue_date >= $2 AND b.issue_date <= $3",
    )
    .bind(role)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
}

/// SUM(total_price) over `role` bills issued at or after `start`; 0.0 when none.
pub async fn sales_total_since(
    pool: &PgPool,
    role: &str,
    start: DateTime<Utc>,
) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COALESCE(SUM(b.total_price), 0.0) FROM bills b
         JOIN orders o ON o.id = b.order_id
         JOIN user_roles ur ON ur.user_id = o.user_id
         JOIN roles r ON r.id = ur.role_id
         WHERE r.name = $1 AND b.issue_date >= $2",
    )
    .bind(role)
    .bind(start)
    .fetch_one(pool)
    .await
}

/// Name of the `role` user with the highest bill total since `start`.
pub async fn top_spender_since(
    pool: &PgPool,
    role: &str,
    start: DateTime<Utc>,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT u.name FROM users u
         JOIN user_roles ur ON ur.user_id = u.id
         JOIN roles r ON r.id = ur.role_id
         JOIN orders o ON o.user_id = u.id
         JOIN bills b ON b.order_id = o.id
         WHERE r.name = $1 AND b.issue_date >= $2
         GROUP BY u.id
         ORDER BY SUM(b.total_price) DESC
         LIMIT 1",
    )
    .bind(role)
    .bind(start)
    .fetch_optional(pool)
    .await
}
