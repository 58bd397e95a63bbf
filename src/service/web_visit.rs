//! Web-visit service: append-only, always succeeds

use sqlx::PgPool;

use crate::db;
use crate::error::AppResult;
use crate::models::web_visit::WebVisit;

pub async fn record(pool: &PgPool, ip: &str) -> AppResult<WebVisit> {
    Ok(db::web_visits::insert(pool, ip).await?)
}

pub async fn count(pool: &PgPool) -> AppResult<i64> {
    Ok(db::web_visits::count(pool).await?)
}
