use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Bill {
    pub id: i64,
    pub issue_date: DateTime<Utc>,
    pub total_price: f64,
    pub paid: bool,
    pub order_id: i64,
}

/// Input for both create and update. `issue_date` is set by the server
/// at creation time.
#[derive(Debug, Deserialize)]
pub struct BillInput {
    pub total_price: f64,
    pub paid: bool,
    pub order_id: i64,
}
