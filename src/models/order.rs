use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub total_price: f64,
    pub order_date: DateTime<Utc>,
    pub state: String,
    pub user_id: i64,
}

/// Input for both create and update. `order_date` is set by the server
/// at creation time and is not client-mutable.
#[derive(Debug, Deserialize)]
pub struct OrderInput {
    pub total_price: f64,
    pub state: String,
    pub user_id: i64,
}
