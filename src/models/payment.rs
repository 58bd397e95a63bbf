use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,
    pub amount_paid: f64,
    pub payment_method: String,
    pub issue_date: DateTime<Utc>,
    pub user_id: i64,
    pub bill_id: i64,
}

/// Input for both create and update. `issue_date` is set by the server
/// at creation time.
#[derive(Debug, Deserialize)]
pub struct PaymentInput {
    pub amount_paid: f64,
    pub payment_method: String,
    pub user_id: i64,
    pub bill_id: i64,
}
