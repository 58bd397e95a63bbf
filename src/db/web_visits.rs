//! Web-visit log, append-only

use sqlx::PgPool;

use crate::models::web_visit::WebVisit;

pub async fn insert(pool: &PgPool, ip: &str) -> Result<WebVisit, sqlx::Error> {
    sqlx::query_as("INSERT INTO web_visits (ip) VALUES ($1) RETURNING *")
        .bind(ip)
        .fetch_one(pool)
        .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM web_visits")
        .fetch_one(pool)
        .await
}
