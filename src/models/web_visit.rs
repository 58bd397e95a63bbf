use chrono::{DateTime, Utc};
use serde::Serialize;

/// Append-only visit log entry; never updated or deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WebVisit {
    pub id: i64,
    pub ip: String,
    pub visited_at: DateTime<Utc>,
}
