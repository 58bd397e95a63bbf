//! Report database operations

use sqlx::PgPool;

use crate::models::report::{Report, ReportInput};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Report>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM reports WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Report>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM reports ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn insert(pool: &PgPool, data: &ReportInput) -> Result<Report, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO reports (type, date_report, content) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(data.report_type.trim())
    .bind(data.date_report)
    .bind(data.content.trim())
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: &ReportInput,
) -> Result<Option<Report>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE reports SET type = $1, date_report = $2, content = $3
         WHERE id = $4
         RETURNING *",
    )
    .bind(data.report_type.trim())
    .bind(data.date_report)
    .bind(data.content.trim())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM reports WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
