//! Role database operations

use sqlx::PgPool;

use crate::models::role::{Role, RoleInput};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Role>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM roles WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM roles ORDER BY id").fetch_all(pool).await
}

pub async fn name_taken(
    pool: &PgPool,
    name: &str,
    exclude_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM roles WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
    )
    .bind(name)
    .bind(exclude_id)
    .fetch_one(pool)
    .await
}

pub async fn insert(pool: &PgPool, data: &RoleInput) -> Result<Role, sqlx::Error> {
    sqlx::query_as("INSERT INTO roles (name) VALUES ($1) RETURNING *")
        .bind(data.name.trim())
        .fetch_one(pool)
        .await
}

pub async fn update(pool: &PgPool, id: i64, data: &RoleInput) -> Result<Option<Role>, sqlx::Error> {
    sqlx::query_as("UPDATE roles SET name = $1 WHERE id = $2 RETURNING *")
        .bind(data.name.trim())
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM roles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
